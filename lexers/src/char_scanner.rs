#![deny(warnings)]

use crate::scanner::Scanner;

static WHITE: &[char] = &[' ', '\n', '\r', '\t'];
static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
static ALPHA: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z'];


impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    /// Discard leading whitespace, returns whether any was found.
    pub fn skip_whitespace(&mut self) -> bool {
        let skipped = self.skip_all(WHITE);
        self.ignore();
        skipped
    }

    // scan numbers like [0-9]+(\.[0-9]*)?
    // A trailing '.' with no fraction digits is part of the literal.
    pub fn scan_number(&mut self) -> Option<String> {
        if !self.skip_all(DIGITS) {
            return None;
        }
        if self.accept(&'.').is_some() {
            self.skip_all(DIGITS);
        }
        Some(self.extract_string())
    }

    // scan [a-zA-Z]+
    pub fn scan_identifier(&mut self) -> Option<String> {
        if !self.skip_all(ALPHA) {
            return None;
        }
        Some(self.extract_string())
    }
}

///////////////////////////////////////////////////////////////////////////////
