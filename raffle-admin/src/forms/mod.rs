//!
//! Form models validated on the client before any request is sent.
//!
//! Server side field errors are merged back with
//! [FormErrors::apply_server_errors].
//!

mod account_form;
mod auth_forms;
mod form_errors;
mod order_form;
mod profile_form;
mod raffle_form;
mod registration_form;
mod validators;

pub use account_form::*;
pub use auth_forms::*;
pub use form_errors::*;
pub use order_form::*;
pub use profile_form::*;
pub use raffle_form::*;
pub use registration_form::*;
