// portal/src/auth.rs

// Login and registration forms for both roles. A successful login stores
// the session locally and asks to move on to the role's dashboard.

use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use models::{
    require, Credentials, DoctorRegistration, PatientRegistration, Role, Session, ValidationResult,
};

use crate::api::ClinicApi;
use crate::errors::{NETWORK_ERROR_MESSAGE, NETWORK_ERROR_RETRY_MESSAGE};
use crate::page::{MessageSlot, Navigation, SubmitOutcome};
use crate::session::store_session;
use crate::storage::LocalStorage;

pub const DOCTOR_LOGIN_MESSAGE: &str = "Login successful! Redirecting...";
pub const REGISTERED_FALLBACK_MESSAGE: &str = "Registration successful";
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_secs(1);

#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm").field("email", &self.email).finish_non_exhaustive()
    }
}

impl LoginForm {
    fn credentials(&self) -> ValidationResult<Credentials> {
        require("Email", &self.email)?;
        require("Password", &self.password)?;
        Ok(Credentials { email: self.email.clone(), password: self.password.clone() })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    /// Only used by doctor registration.
    pub specialization: String,
}

impl RegisterForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn check_common(&self) -> ValidationResult<()> {
        require("First name", &self.first_name)?;
        require("Last name", &self.last_name)?;
        require("Email", &self.email)?;
        require("Password", &self.password)
    }

    fn patient(&self) -> ValidationResult<PatientRegistration> {
        self.check_common()?;
        Ok(PatientRegistration {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    fn doctor(&self) -> ValidationResult<DoctorRegistration> {
        self.check_common()?;
        require("Specialization", &self.specialization)?;
        Ok(DoctorRegistration {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            specialization: self.specialization.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Result of a login submission: the outcome, plus where to go next when
/// it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResult {
    pub outcome: SubmitOutcome,
    pub navigation: Option<Navigation>,
}

impl LoginResult {
    fn stay(outcome: SubmitOutcome) -> Self {
        LoginResult { outcome, navigation: None }
    }
}

/// Entry page for one role: registration and login forms.
pub struct AuthPage {
    role: Role,
    api: Arc<dyn ClinicApi>,
    storage: Arc<dyn LocalStorage>,
    register_message: MessageSlot,
    login_message: MessageSlot,
}

impl AuthPage {
    pub fn patient(api: Arc<dyn ClinicApi>, storage: Arc<dyn LocalStorage>) -> Self {
        Self::new(Role::Patient, api, storage)
    }

    pub fn doctor(api: Arc<dyn ClinicApi>, storage: Arc<dyn LocalStorage>) -> Self {
        Self::new(Role::Doctor, api, storage)
    }

    fn new(role: Role, api: Arc<dyn ClinicApi>, storage: Arc<dyn LocalStorage>) -> Self {
        AuthPage { role, api, storage, register_message: MessageSlot::new(), login_message: MessageSlot::new() }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Patients are asked to retry; the doctor pages use the short text.
    fn network_text(&self) -> &'static str {
        match self.role {
            Role::Patient => NETWORK_ERROR_RETRY_MESSAGE,
            Role::Doctor => NETWORK_ERROR_MESSAGE,
        }
    }

    pub fn register_message(&self) -> &MessageSlot {
        &self.register_message
    }

    pub fn login_message(&self) -> &MessageSlot {
        &self.login_message
    }

    pub async fn register(&self, form: &mut RegisterForm) -> SubmitOutcome {
        let reply = match self.role {
            Role::Patient => match form.patient() {
                Ok(registration) => self.api.register_patient(&registration).await,
                Err(err) => return self.invalid(&self.register_message, err).await,
            },
            Role::Doctor => match form.doctor() {
                Ok(registration) => self.api.register_doctor(&registration).await,
                Err(err) => return self.invalid(&self.register_message, err).await,
            },
        };

        match reply {
            Ok(msg) => {
                info!("Registered {} {}", self.role, form.email);
                let text = msg.message.unwrap_or_else(|| REGISTERED_FALLBACK_MESSAGE.to_string());
                self.register_message.success(text).await;
                form.reset();
                SubmitOutcome::Accepted
            }
            Err(err) => self.register_message.report_with(&err, self.network_text()).await,
        }
    }

    pub async fn login(&self, form: &LoginForm) -> LoginResult {
        let credentials = match form.credentials() {
            Ok(c) => c,
            Err(err) => return LoginResult::stay(self.invalid(&self.login_message, err).await),
        };

        let reply = match self.role {
            Role::Patient => self.api.login_patient(&credentials).await.map(|r| {
                (Session { role: Role::Patient, id: r.patient_id, display_name: r.first_name }, r.message)
            }),
            Role::Doctor => self.api.login_doctor(&credentials).await.map(|r| {
                let session = Session { role: Role::Doctor, id: r.doctor_id, display_name: r.first_name };
                (session, DOCTOR_LOGIN_MESSAGE.to_string())
            }),
        };

        match reply {
            Ok((session, message)) => {
                if let Err(e) = store_session(self.storage.as_ref(), &session) {
                    error!("Could not persist {} session: {}", self.role, e);
                    self.login_message.error(format!("Error: {}", e)).await;
                    return LoginResult::stay(SubmitOutcome::NetworkFailure);
                }
                self.login_message.success(message).await;
                LoginResult {
                    outcome: SubmitOutcome::Accepted,
                    navigation: Some(Navigation::to(self.role.dashboard_page()).after(LOGIN_REDIRECT_DELAY)),
                }
            }
            Err(err) => LoginResult::stay(self.login_message.report_with(&err, self.network_text()).await),
        }
    }

    async fn invalid(&self, slot: &MessageSlot, err: models::ValidationError) -> SubmitOutcome {
        slot.error(err.to_string()).await;
        SubmitOutcome::Invalid(err)
    }
}
