use super::{joined, Command};
use raffle_admin::{
    application::ApplicationState,
    dto::output::{OrderFilters, PageRequest, RaffleFilters, UserFilters},
    error::Error,
    forms::LoginForm,
    routes::{admin_guard, GuardOutcome, Route},
};

pub async fn run(state: &ApplicationState, command: Command) -> Result<(), Error> {
    match command {
        Command::Login { email, password } => login(state, email, password).await,
        Command::Logout => {
            let route = state.auth_service.logout().await?;
            println!("Logged out. Continue at {}", route.path());
            Ok(())
        }
        Command::WhoAmI => {
            whoami(state);
            Ok(())
        }
        Command::Raffles { title } => raffles(state, joined(&title)).await,
        Command::Orders { status } => {
            guard(state, Route::Orders)?;
            let filters = OrderFilters {
                status,
                ..Default::default()
            };
            let orders = state
                .order_service
                .search_orders(filters, PageRequest::default().sorted("createdAt,desc"))
                .await?;

            for order in &orders.content {
                println!(
                    "{:>6}  {:<12}  {:<10}  {} {}  {}",
                    order.id,
                    order.order_number,
                    order.status,
                    order.customer.first_name,
                    order.customer.last_name,
                    order.total
                );
            }
            println!("{} of {} orders", orders.content.len(), orders.total_elements);
            Ok(())
        }
        Command::Users { name } => {
            guard(state, Route::Accounts)?;
            let filters = UserFilters {
                full_name: joined(&name),
                ..Default::default()
            };
            let users = state
                .user_service
                .search_users(filters, PageRequest::default())
                .await?;

            for user in &users.content {
                let enabled = if user.enabled { "" } else { "  (disabled)" };
                println!(
                    "{:>6}  {:<30}  {:<30}  {}{enabled}",
                    user.id,
                    user.full_name(),
                    user.email,
                    user.role
                );
            }
            println!("{} of {} users", users.content.len(), users.total_elements);
            Ok(())
        }
    }
}

async fn login(state: &ApplicationState, email: String, password: String) -> Result<(), Error> {
    let credentials = LoginForm { email, password }
        .validate()
        .map_err(Error::Validation)?;

    let route = state.auth_service.login(credentials).await?;
    let name = state
        .auth_service
        .current_user()
        .map(|user| user.full_name())
        .unwrap_or_default();
    println!("Logged in as {name}. Continue at {}", route.path());

    Ok(())
}

fn whoami(state: &ApplicationState) {
    match state.auth_service.current_user() {
        Some(user) if state.auth_service.is_authenticated() => {
            println!("{} <{}> {}", user.full_name(), user.email, user.role);
        }
        Some(user) => println!("{} <{}> session expired", user.full_name(), user.email),
        None => println!("not logged in"),
    }
}

async fn raffles(state: &ApplicationState, title: Option<String>) -> Result<(), Error> {
    guard(state, Route::Raffles)?;

    let filters = RaffleFilters {
        title,
        ..Default::default()
    };
    let raffles = state
        .raffle_service
        .search_raffles(filters, PageRequest::default())
        .await?;

    for raffle in &raffles.content {
        println!(
            "{:>6}  {:<40}  {:<10}  {:>8}  {} tickets",
            raffle.id, raffle.title, raffle.status, raffle.ticket_price, raffle.total_tickets
        );
    }
    println!("{} of {} raffles", raffles.content.len(), raffles.total_elements);

    Ok(())
}

fn guard(state: &ApplicationState, route: Route) -> Result<(), Error> {
    match admin_guard(&state.session, route) {
        GuardOutcome::Allow => Ok(()),
        GuardOutcome::Redirect(_) => Err(Error::NotAuthenticated),
    }
}
