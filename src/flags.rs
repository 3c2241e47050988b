use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub set: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                set: false,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                set: false,
            },
        );

        Flags { flags }
    }

    // Unknown arguments are ignored; none of the flags carry a value.
    pub fn parse(&mut self, args: &[String]) {
        for arg in args {
            for flag in self.flags.values_mut() {
                if arg == &flag.short || arg == &flag.long {
                    flag.set = true;
                }
            }
        }
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags.get(name).map(|f| f.set).unwrap_or(false)
    }

    pub fn print_help(&self) {
        println!("Usage: capillary [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}
