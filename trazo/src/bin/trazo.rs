mod repl {
    use trazo::{Bindings, Function, Sample, ShuntingParser};

    /// Sampling range used for every plotted expression.
    pub struct Settings {
        pub begin: f32,
        pub end: f32,
        pub step: f32,
    }

    impl Default for Settings {
        fn default() -> Self {
            Settings { begin: 0.0, end: 10.0, step: 1.0 }
        }
    }

    impl Settings {
        // the library doesn't guard against ranges that never end, we do
        pub fn new(begin: f32, end: f32, step: f32) -> Result<Settings, String> {
            if !begin.is_finite() || !end.is_finite() || !step.is_finite() {
                return Err(format!("range values must be finite"));
            }
            if step == 0.0 || (end - begin) * step < 0.0 {
                return Err(format!("step {} never gets from {} to {}", step, begin, end));
            }
            Ok(Settings { begin, end, step })
        }
    }

    const BAR: &str = "\u{2b24}";
    const BAR_WIDTH: f32 = 40.0;

    fn print_samples(samples: &[Sample]) {
        let max_y = samples
            .iter()
            .map(|s| s.y.abs())
            .filter(|y| y.is_finite())
            .fold(0.0f32, f32::max);
        for s in samples {
            let bar = if max_y > 0.0 && s.y.is_finite() {
                BAR.repeat((BAR_WIDTH * s.y.abs() / max_y) as usize)
            } else {
                String::new()
            };
            println!("{:10.3} {:14.6} {}", s.x, s.y, bar);
        }
    }

    pub fn plot(input: &str, settings: &Settings, vars: &Bindings) {
        match ShuntingParser::parse_str(input) {
            Err(e) => println!("Parse error: {}", e),
            Ok(rpn) => {
                println!("y = {}", rpn);
                let samples = trazo::samples(&rpn, settings.begin, settings.end, settings.step, vars)
                    .collect::<Result<Vec<_>, _>>();
                match samples {
                    Err(e) => println!("Eval error: {}", e),
                    Ok(samples) => print_samples(&samples),
                }
            }
        }
    }

    fn assign(name: &str, value: &str, vars: &mut Bindings) {
        let valid = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic());
        if !valid || name == "x" || Function::from_name(name).is_some() {
            println!("Can't bind '{}'", name);
            return;
        }
        match ShuntingParser::parse_str(value) {
            Err(e) => println!("Parse error: {}", e),
            Ok(rpn) => match vars.eval(&rpn, 0.0) {
                Err(e) => println!("Eval error: {}", e),
                Ok(result) => vars.setvar(name, result),
            },
        }
    }

    fn set_range(args: &str, settings: &mut Settings) {
        let nums: Result<Vec<f32>, _> = args.split_whitespace().map(str::parse::<f32>).collect();
        match nums.as_deref() {
            Ok([begin, end, step]) => match Settings::new(*begin, *end, *step) {
                Ok(s) => *settings = s,
                Err(e) => println!("Bad range: {}", e),
            },
            _ => println!("Usage: :range <begin> <end> <step>"),
        }
        println!("range {} to {} step {}", settings.begin, settings.end, settings.step);
    }

    fn list_vars(vars: &Bindings) {
        let mut names: Vec<_> = vars.0.iter().collect();
        names.sort_by(|a, b| a.0.cmp(b.0));
        for (name, value) in names {
            println!("{} = {}", name, value);
        }
    }

    pub fn parse_statement(settings: &mut Settings, vars: &mut Bindings, input: &str) {
        let input = input.trim();
        if input.is_empty() {
            return;
        }
        if let Some(args) = input.strip_prefix(":range") {
            set_range(args, settings);
        } else if input == ":vars" {
            list_vars(vars);
        } else if let Some((name, value)) = input.split_once('=') {
            assign(name.trim(), value, vars);
        } else {
            plot(input, settings, vars);
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn main() -> Result<(), String> {
    init_tracing();
    let mut settings = repl::Settings::default();
    let mut vars = trazo::Bindings::with_constants();

    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        repl::plot(&input, &settings, &vars);
        return Ok(());
    }

    use rustyline::error::ReadlineError;
    let histpath = dirs::home_dir().map(|h| h.join(".trazo_history"));
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                repl::parse_statement(&mut settings, &mut vars, &line);
            }
        }
    }
    if let Some(ref path) = histpath {
        rl.save_history(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
