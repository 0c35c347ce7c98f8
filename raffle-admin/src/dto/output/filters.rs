use crate::dto::{OrderStatus, PaymentMethod, RaffleStatus, Role, TicketStatus};

///
/// Filters that become query parameters of search requests.
/// Only non-empty fields are sent.
///
pub trait QueryFilters {
    fn query_params(&self) -> Vec<(&'static str, String)>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    ///
    /// indexing starts at 0
    ///
    pub page: u32,
    pub size: u32,
    pub sort: Option<String>,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            sort: None,
        }
    }

    pub fn sorted(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.to_string()), ("size", self.size.to_string())];
        if let Some(sort) = self.sort.as_ref().filter(|sort| !sort.is_empty()) {
            params.push(("sort", sort.clone()));
        }

        params
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, 20)
    }
}

fn push_text(params: &mut Vec<(&'static str, String)>, name: &'static str, value: &Option<String>) {
    if let Some(value) = value {
        let value = value.trim();
        if !value.is_empty() {
            params.push((name, value.to_string()));
        }
    }
}

fn push_value<T: ToString>(params: &mut Vec<(&'static str, String)>, name: &'static str, value: &Option<T>) {
    if let Some(value) = value {
        params.push((name, value.to_string()));
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RaffleFilters {
    pub title: Option<String>,
    pub status: Option<RaffleStatus>,
}

impl QueryFilters for RaffleFilters {
    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_text(&mut params, "title", &self.title);
        push_value(&mut params, "status", &self.status);

        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilters {
    pub order_number: Option<String>,
    pub customer_name: Option<String>,
    pub raffle_id: Option<i64>,
    pub status: Option<OrderStatus>,
    pub payment_method: Option<PaymentMethod>,
}

impl QueryFilters for OrderFilters {
    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_text(&mut params, "orderNumber", &self.order_number);
        push_text(&mut params, "customerName", &self.customer_name);
        push_value(&mut params, "raffleId", &self.raffle_id);
        push_value(&mut params, "status", &self.status);
        push_value(&mut params, "paymentMethod", &self.payment_method);

        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilters {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub enabled: Option<bool>,
}

impl UserFilters {
    pub fn by_full_name(full_name: impl Into<String>) -> Self {
        Self {
            full_name: Some(full_name.into()),
            ..Default::default()
        }
    }
}

impl QueryFilters for UserFilters {
    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_text(&mut params, "fullName", &self.full_name);
        push_text(&mut params, "email", &self.email);
        push_value(&mut params, "role", &self.role);
        push_value(&mut params, "enabled", &self.enabled);

        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketFilters {
    pub ticket_number: Option<String>,
    pub status: Option<TicketStatus>,
    pub customer_id: Option<i64>,
}

impl QueryFilters for TicketFilters {
    fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_text(&mut params, "ticketNumber", &self.ticket_number);
        push_value(&mut params, "status", &self.status);
        push_value(&mut params, "customerId", &self.customer_id);

        params
    }
}
