//! Authentication screen modes and their per-mode copy.
//!
//! SYSTEM CONTEXT
//! ==============
//! The active mode comes from the `?mode=` query parameter of `/auth`.
//! Unknown or missing values fall back to login. Switching mode replaces the
//! URL and remounts the target form with empty fields.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use crate::net::types::SubmissionError;
use crate::util::messages;
use crate::util::schema::{self, Schema};

/// Route path that hosts every authentication mode.
pub const AUTH_PATH: &str = "/auth";

/// Query parameter carrying the mode selector.
pub const MODE_PARAM: &str = "mode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
    ForgotPassword,
}

/// Footer link offered to switch away from the current mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeLink {
    pub prompt: &'static str,
    pub label: &'static str,
    pub target: AuthMode,
}

/// In-form shortcut to another mode, rendered without a prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InlineLink {
    pub label: &'static str,
    pub target: AuthMode,
}

impl AuthMode {
    pub const ALL: [AuthMode; 3] = [AuthMode::Login, AuthMode::Signup, AuthMode::ForgotPassword];

    /// Resolve the external selector. Anything but the three literal values
    /// (including absence) means login.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some("signup") => Self::Signup,
            Some("forgot-password") => Self::ForgotPassword,
            _ => Self::Login,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
            Self::ForgotPassword => "forgot-password",
        }
    }

    /// In-app location for this mode.
    pub fn href(self) -> String {
        format!("{AUTH_PATH}?{MODE_PARAM}={}", self.as_str())
    }

    pub fn schema(self) -> &'static Schema {
        match self {
            Self::Login => &schema::LOGIN,
            Self::Signup => &schema::SIGNUP,
            Self::ForgotPassword => &schema::FORGOT_PASSWORD,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Fazer Login",
            Self::Signup => "Criar Conta",
            Self::ForgotPassword => "Recuperar Senha",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Login => "Entre com suas credenciais para acessar sua conta",
            Self::Signup => "Crie sua conta e comece a usar nossa plataforma",
            Self::ForgotPassword => "Enviaremos instruções para seu e-mail",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Entrar",
            Self::Signup => "Criar conta",
            Self::ForgotPassword => "Enviar instruções",
        }
    }

    pub fn busy_label(self) -> &'static str {
        match self {
            Self::Login => "Entrando...",
            Self::Signup => "Criando conta...",
            Self::ForgotPassword => "Enviando...",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            Self::Login => messages::AUTH_LOGIN_SUCCESS,
            Self::Signup => messages::AUTH_REGISTER_SUCCESS,
            Self::ForgotPassword => messages::AUTH_FORGOT_PASSWORD_SENT,
        }
    }

    /// Generic retry text for failures without a dedicated message.
    pub fn retry_message(self) -> &'static str {
        match self {
            Self::Login => messages::LOGIN_FAILED_RETRY,
            Self::Signup => messages::SIGNUP_FAILED_RETRY,
            Self::ForgotPassword => messages::FORGOT_FAILED_RETRY,
        }
    }

    /// User-facing text for a submission failure in this mode.
    pub fn failure_message(self, err: &SubmissionError) -> &'static str {
        match err {
            SubmissionError::InvalidCredentials => messages::AUTH_INVALID_CREDENTIALS,
            SubmissionError::EmailTaken => messages::AUTH_EMAIL_EXISTS,
            SubmissionError::Transport(_) | SubmissionError::Unknown(_) => self.retry_message(),
        }
    }

    pub fn switch_link(self) -> ModeLink {
        match self {
            Self::Login => ModeLink {
                prompt: "Não tem uma conta?",
                label: "Criar conta gratuita",
                target: Self::Signup,
            },
            Self::Signup => ModeLink { prompt: "Já tem uma conta?", label: "Fazer login", target: Self::Login },
            Self::ForgotPassword => ModeLink {
                prompt: "Lembrou da senha?",
                label: "Voltar para login",
                target: Self::Login,
            },
        }
    }

    /// Extra in-form link; only login offers one (to password recovery).
    pub fn secondary_link(self) -> Option<InlineLink> {
        match self {
            Self::Login => Some(InlineLink { label: "Esqueci minha senha", target: Self::ForgotPassword }),
            Self::Signup | Self::ForgotPassword => None,
        }
    }
}
