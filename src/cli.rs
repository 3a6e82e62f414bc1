use crate::Error;
use crate::Result;
use std::fmt;

/// Database password taken from the command line. Formatting is redacted so
/// the secret cannot end up in logs.
pub struct Password(String);

impl Password {
    pub fn new(raw: String) -> Self {
        Password(raw)
    }

    /// The raw secret, for embedding into the connection descriptor only.
    pub fn reveal(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

pub fn print_banner() {
    println!("This migration requires the Supabase database password.");
    println!();
    println!("🔐 To obtain the password:");
    println!("1. Open https://supabase.com/dashboard/project/hnhzindsfuqnaxosujay/settings/database");
    println!("2. Copy the 'Database Password'");
    println!("3. Run: quiz-migrate <DB_PASSWORD>");
    println!();
    println!("Alternatively, run the SQL manually in the Supabase dashboard.");
}

pub fn parse_args(args: &[String]) -> Result<Password> {
    if args.len() < 2 {
        let program = args.first().map(String::as_str).unwrap_or("quiz-migrate");
        return Err(crate::error!(UsageError, "Usage: {} <DB_PASSWORD>", program));
    }
    Ok(Password::new(args[1].clone()))
}
