use anyhow::Result;
use dialoguer::Input;
use eventdesk_core::auth;
use owo_colors::OwoColorize;

const MAX_ATTEMPTS: u32 = 3;

/// Gate every command behind the coordinator credential check.
///
/// Credentials given on the command line are checked once; otherwise the
/// user gets a few interactive attempts.
pub fn require_login(user: Option<String>, password: Option<String>) -> Result<()> {
    if let (Some(user), Some(password)) = (&user, &password) {
        if auth::verify(user, password) {
            return Ok(());
        }
        anyhow::bail!("Invalid coordinator credentials.");
    }

    for _ in 0..MAX_ATTEMPTS {
        let username = match &user {
            Some(u) => u.clone(),
            None => Input::new().with_prompt("  Username").interact_text()?,
        };
        let pass = match &password {
            Some(p) => p.clone(),
            None => rpassword::prompt_password("  Password: ")?,
        };

        if auth::verify(&username, &pass) {
            return Ok(());
        }
        eprintln!("  {}", "Invalid username or password.".red());
    }

    anyhow::bail!("Too many failed login attempts.")
}
