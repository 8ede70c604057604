//! User-facing copy for the authentication screen.
//!
//! Validation messages render inline under their field; the `AUTH_*` texts
//! are only ever shown as toast notifications.

pub const EMAIL_REQUIRED: &str = "E-mail é obrigatório";
pub const EMAIL_INVALID: &str = "Formato de e-mail inválido";

pub const PASSWORD_REQUIRED: &str = "Senha é obrigatória";
pub const PASSWORD_TOO_SHORT: &str = "Senha deve ter pelo menos 8 caracteres";
pub const PASSWORD_MISSING_LETTER: &str = "Senha deve conter pelo menos 1 letra";
pub const PASSWORD_MISSING_DIGIT: &str = "Senha deve conter pelo menos 1 número";
pub const PASSWORD_MISSING_SPECIAL: &str = "Senha deve conter pelo menos 1 caractere especial";
pub const PASSWORD_HINT: &str = "Mínimo 8 caracteres, com letra, número e caractere especial.";

pub const CONFIRMATION_REQUIRED: &str = "Confirmação é obrigatória";
pub const PASSWORD_MISMATCH: &str = "As senhas não coincidem";

pub const FIRST_NAME_REQUIRED: &str = "Nome é obrigatório";
pub const FIRST_NAME_TOO_SHORT: &str = "Nome deve ter pelo menos 2 caracteres";
pub const LAST_NAME_REQUIRED: &str = "Sobrenome é obrigatório";
pub const LAST_NAME_TOO_SHORT: &str = "Sobrenome deve ter pelo menos 2 caracteres";

pub const AUTH_LOGIN_SUCCESS: &str = "Login realizado com sucesso!";
pub const AUTH_REGISTER_SUCCESS: &str = "Conta criada! Vamos configurar sua empresa.";
pub const AUTH_FORGOT_PASSWORD_SENT: &str = "Enviamos um e-mail com instruções para redefinir sua senha.";
pub const AUTH_INVALID_CREDENTIALS: &str = "E-mail ou senha incorretos";
pub const AUTH_EMAIL_EXISTS: &str = "Já existe uma conta criada com este e-mail. Faça login para continuar.";

pub const LOGIN_FAILED_RETRY: &str = "Falha ao realizar login. Tente novamente.";
pub const SIGNUP_FAILED_RETRY: &str = "Falha ao criar conta. Tente novamente.";
pub const FORGOT_FAILED_RETRY: &str = "Falha ao enviar instruções. Tente novamente.";

pub const FORGOT_PASSWORD_SENT_DETAIL: &str = "E-mail de recuperação enviado com sucesso";
