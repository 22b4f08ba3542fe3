#[cfg(feature = "cli")]
use crossterm::style::{Attribute, Color, ResetColor, SetAttribute, SetForegroundColor};
#[cfg(feature = "cli")]
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LogLevel {
    Success,
    Error,
    Info,
    Print,
    Warning,
}

#[derive(Debug, Clone, Default)]
pub struct Logger;

impl Logger {
    pub fn new() -> Self {
        Logger
    }

    /// Prints one status line. Errors go to stderr, everything else to stdout.
    pub fn log_message(&self, level: LogLevel, message: &str) {
        let line = format!(
            "{} {} {}",
            self.tool_signature(),
            self.format_status(level),
            message
        );
        if level == LogLevel::Error {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    #[cfg(feature = "cli")]
    fn tool_signature(&self) -> String {
        let mut s = String::new();

        write!(&mut s, "{}", SetForegroundColor(Color::Grey)).unwrap();
        s.push('[');

        write!(
            &mut s,
            "{}",
            SetForegroundColor(Color::Rgb {
                r: 61,
                g: 220,
                b: 132,
            })
        )
        .unwrap();
        write!(&mut s, "{}", SetAttribute(Attribute::Bold)).unwrap();
        s.push_str("kconfig-bump");
        write!(&mut s, "{}", SetAttribute(Attribute::Reset)).unwrap();

        write!(&mut s, "{}", SetForegroundColor(Color::Grey)).unwrap();
        s.push(']');
        write!(&mut s, "{}", ResetColor).unwrap();

        s
    }

    #[cfg(not(feature = "cli"))]
    fn tool_signature(&self) -> String {
        "[kconfig-bump]".to_string()
    }

    #[cfg(feature = "cli")]
    fn format_status(&self, level: LogLevel) -> String {
        let mut s = String::new();

        let color = match level {
            LogLevel::Success => Color::Rgb {
                r: 76,
                g: 175,
                b: 80,
            },
            LogLevel::Error => Color::Rgb {
                r: 244,
                g: 67,
                b: 54,
            },
            LogLevel::Info => Color::Rgb {
                r: 33,
                g: 150,
                b: 243,
            },
            LogLevel::Warning => Color::Rgb {
                r: 255,
                g: 152,
                b: 0,
            },
            LogLevel::Print => Color::Rgb {
                r: 255,
                g: 255,
                b: 255,
            },
        };

        s.push('[');
        write!(&mut s, "{}", SetForegroundColor(color)).unwrap();
        write!(&mut s, "{}", SetAttribute(Attribute::Bold)).unwrap();
        s.push_str(status_label(level));
        write!(&mut s, "{}", SetAttribute(Attribute::Reset)).unwrap();
        s.push(']');
        write!(&mut s, "{}", ResetColor).unwrap();

        s
    }

    #[cfg(not(feature = "cli"))]
    fn format_status(&self, level: LogLevel) -> String {
        format!("[{}]", status_label(level))
    }
}

fn status_label(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Success => "SUCCESS",
        LogLevel::Error => "ERROR",
        LogLevel::Info => "INFO",
        LogLevel::Warning => "WARNING",
        LogLevel::Print => "PRINT",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_contains_label() {
        let logger = Logger::new();
        assert!(logger.format_status(LogLevel::Warning).contains("WARNING"));
        assert!(logger.tool_signature().contains("kconfig-bump"));
    }
}
