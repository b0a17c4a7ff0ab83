// cli/src/cli/handlers_auth.rs

// Registration, login and logout for both roles.

use anyhow::{Context, Result};
use models::Role;
use portal::auth::{AuthPage, LoginForm, RegisterForm};
use portal::session;

use crate::cli::cli::PortalContext;
use crate::cli::handlers_utils::{finish, follow_navigation, print_message};

fn auth_page(ctx: &PortalContext, role: Role) -> AuthPage {
    match role {
        Role::Patient => AuthPage::patient(ctx.api.clone(), ctx.storage.clone()),
        Role::Doctor => AuthPage::doctor(ctx.api.clone(), ctx.storage.clone()),
    }
}

async fn register(ctx: &PortalContext, role: Role, mut form: RegisterForm) -> Result<()> {
    let page = auth_page(ctx, role);
    let outcome = page.register(&mut form).await;
    print_message(page.register_message()).await;
    finish("Registration", outcome)
}

async fn login(ctx: &PortalContext, role: Role, email: String, password: String) -> Result<()> {
    let page = auth_page(ctx, role);
    let result = page.login(&LoginForm { email, password }).await;
    print_message(page.login_message()).await;
    if let Some(navigation) = &result.navigation {
        follow_navigation(navigation).await;
    }
    finish("Login", result.outcome)
}

pub async fn handle_patient_register(
    ctx: &PortalContext,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
) -> Result<()> {
    let form = RegisterForm { first_name, last_name, email, password, ..RegisterForm::default() };
    register(ctx, Role::Patient, form).await
}

pub async fn handle_doctor_register(
    ctx: &PortalContext,
    first_name: String,
    last_name: String,
    specialization: String,
    email: String,
    password: String,
) -> Result<()> {
    let form = RegisterForm { first_name, last_name, email, password, specialization };
    register(ctx, Role::Doctor, form).await
}

pub async fn handle_patient_login(ctx: &PortalContext, email: String, password: String) -> Result<()> {
    login(ctx, Role::Patient, email, password).await
}

pub async fn handle_doctor_login(ctx: &PortalContext, email: String, password: String) -> Result<()> {
    login(ctx, Role::Doctor, email, password).await
}

pub async fn handle_logout(ctx: &PortalContext, role: Role) -> Result<()> {
    let navigation = session::logout(ctx.storage.as_ref(), role).context("Failed to clear the stored session")?;
    follow_navigation(&navigation).await;
    Ok(())
}
