use clap::{Parser, Subcommand};
use raffle_admin::dto::OrderStatus;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "raffle-admin", author, version, about = "Raffle administration client")]
#[command(
    after_help = "Environment:\n  RAFFLE_ADMIN_API_BASE_URL   Backend address\n  RAFFLE_ADMIN_LOG            Console log filter"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Log in and store the session
    Login { email: String, password: String },
    /// Drop the stored session
    Logout,
    /// Show the logged in user
    #[command(name = "whoami")]
    WhoAmI,
    /// Search raffles by title
    Raffles {
        #[arg(trailing_var_arg = true)]
        title: Vec<String>,
    },
    /// Search orders by status
    Orders {
        #[arg(value_parser = parse_order_status)]
        status: Option<OrderStatus>,
    },
    /// Search users by name
    Users {
        #[arg(trailing_var_arg = true)]
        name: Vec<String>,
    },
}

///
/// Words of a free text argument, `None` when nothing was given
///
pub fn joined(words: &[String]) -> Option<String> {
    let text = words.join(" ");

    (!text.is_empty()).then_some(text)
}

fn parse_order_status(status: &str) -> Result<OrderStatus, String> {
    OrderStatus::from_str(&status.to_uppercase())
        .map_err(|_| format!("unknown order status {status}"))
}
