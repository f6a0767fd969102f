//! Session commands: login, register, whoami, logout.

use anyhow::{Context, Result, bail};
use console::style;
use dialoguer::{Input, Password};
use secrecy::SecretString;

use askboard_types::user::{User, UserFormValues};

use crate::output::print_json;
use crate::state::AppState;

pub async fn login(
    state: &AppState,
    email: Option<String>,
    password: Option<String>,
    json: bool,
) -> Result<()> {
    let email = prompt_or(email, "Email")?;
    let password = password_or(password, false)?;

    let user = state
        .api
        .user
        .login(&UserFormValues::login(email, password))
        .await?;
    keep_token(state, &user).await?;

    report_user("Signed in", &user, json)
}

pub async fn register(
    state: &AppState,
    admin: bool,
    email: Option<String>,
    password: Option<String>,
    username: Option<String>,
    display_name: Option<String>,
    json: bool,
) -> Result<()> {
    let mut form = UserFormValues::login(prompt_or(email, "Email")?, password_or(password, true)?);
    form.username = Some(prompt_or(username, "Username")?);
    form.display_name = Some(prompt_or(display_name, "Display name")?);

    let user = if admin {
        state.api.user.register_admin(&form).await?
    } else {
        state.api.user.register_user(&form).await?
    };
    keep_token(state, &user).await?;

    report_user(
        if admin { "Administrator registered" } else { "Registered" },
        &user,
        json,
    )
}

pub async fn whoami(state: &AppState, json: bool) -> Result<()> {
    let user = state.api.user.current().await?;
    if json {
        return print_json(&user);
    }

    println!();
    print_user(&user);
    println!();
    Ok(())
}

pub async fn logout(state: &AppState, json: bool) -> Result<()> {
    state
        .api
        .client()
        .clear_token()
        .await
        .context("Failed to clear stored token")?;

    if json {
        return print_json(&serde_json::json!({ "signed_out": true }));
    }
    println!();
    println!("  {} Signed out.", style("✓").green().bold());
    println!();
    Ok(())
}

async fn keep_token(state: &AppState, user: &User) -> Result<()> {
    let Some(token) = &user.token else {
        bail!("Server response did not include a token");
    };
    state
        .api
        .client()
        .store_token(&SecretString::from(token.expose().to_owned()))
        .await
        .context("Failed to store token")?;
    tracing::info!(token = %token.masked(), "Stored bearer token");
    Ok(())
}

fn report_user(message: &str, user: &User, json: bool) -> Result<()> {
    if json {
        return print_json(user);
    }
    println!();
    println!("  {} {}", style("✓").green().bold(), message);
    println!();
    print_user(user);
    println!();
    Ok(())
}

fn print_user(user: &User) {
    println!(
        "  {}  {}",
        style("Username:").bold(),
        style(user.username().unwrap_or("-")).cyan()
    );
    if let Some(display_name) = user.display_name() {
        println!("  {}  {}", style("Name:").bold(), display_name);
    }
    if let Some(image) = user.image() {
        println!("  {}  {}", style("Image:").bold(), style(image).dim());
    }
}

fn prompt_or(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::new().with_prompt(prompt).interact_text()?),
    }
}

fn password_or(value: Option<String>, confirm: bool) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => {
            let mut prompt = Password::new().with_prompt("Password");
            if confirm {
                prompt = prompt.with_confirmation("Confirm password", "Passwords do not match");
            }
            Ok(prompt.interact()?)
        }
    }
}
