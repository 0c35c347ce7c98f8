use super::{validators, FieldError, FormErrors};
use crate::dto::{input::Raffle, output::RaffleRequest};
use rust_decimal::Decimal;
use std::str::FromStr;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

pub const MAX_TOTAL_TICKETS: u32 = 100_000;
pub const MAX_TICKET_PRICE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

///
/// Raffle creation and edit form. Values are kept as typed by the user
/// and parsed during validation.
///
#[derive(Debug, Clone, Default)]
pub struct RaffleForm {
    pub title: String,
    pub description: String,
    pub ticket_price: String,
    pub total_tickets: String,
    ///
    /// RFC 3339 date time
    ///
    pub start_date: String,
    ///
    /// RFC 3339 date time
    ///
    pub end_date: String,
}

impl RaffleForm {
    pub const FIELDS: &'static [&'static str] = &[
        "title",
        "description",
        "ticketPrice",
        "totalTickets",
        "startDate",
        "endDate",
    ];

    pub fn from_raffle(raffle: &Raffle) -> Self {
        let format_date = |date: Option<OffsetDateTime>| {
            date.and_then(|date| date.format(&Rfc3339).ok())
                .unwrap_or_default()
        };

        Self {
            title: raffle.title.clone(),
            description: raffle.description.clone().unwrap_or_default(),
            ticket_price: raffle.ticket_price.to_string(),
            total_tickets: raffle.total_tickets.to_string(),
            start_date: format_date(raffle.start_date),
            end_date: format_date(raffle.end_date),
        }
    }

    pub fn validate(&self) -> Result<RaffleRequest, FormErrors> {
        let mut errors = FormErrors::new();

        validators::required_text(&mut errors, "title", &self.title, 100);
        if self.description.trim().chars().count() > 1000 {
            errors.add("description", FieldError::MaxLength(1000));
        }

        let ticket_price = Self::parse_ticket_price(&mut errors, &self.ticket_price);
        let total_tickets = Self::parse_total_tickets(&mut errors, &self.total_tickets);
        let start_date = Self::parse_date(&mut errors, "startDate", &self.start_date);
        let end_date = Self::parse_date(&mut errors, "endDate", &self.end_date);

        if let (Some(start_date), Some(end_date)) = (start_date, end_date) {
            if end_date <= start_date {
                errors.add("endDate", FieldError::DateOrder);
            }
        }

        match (ticket_price, total_tickets, start_date, end_date) {
            (Some(ticket_price), Some(total_tickets), Some(start_date), Some(end_date))
                if errors.is_empty() =>
            {
                Ok(RaffleRequest {
                    title: self.title.trim().to_string(),
                    description: validators::optional(&self.description),
                    ticket_price,
                    total_tickets,
                    start_date,
                    end_date,
                })
            }
            _ => Err(errors),
        }
    }

    fn parse_ticket_price(errors: &mut FormErrors, value: &str) -> Option<Decimal> {
        if !validators::required(errors, "ticketPrice", value) {
            return None;
        }

        let out_of_range = || FieldError::OutOfRange {
            min: "0.01".to_string(),
            max: MAX_TICKET_PRICE.to_string(),
        };

        match Decimal::from_str(value.trim()) {
            Ok(price) if price > Decimal::ZERO && price <= MAX_TICKET_PRICE => Some(price),
            _ => {
                errors.add("ticketPrice", out_of_range());
                None
            }
        }
    }

    fn parse_total_tickets(errors: &mut FormErrors, value: &str) -> Option<u32> {
        if !validators::required(errors, "totalTickets", value) {
            return None;
        }

        match value.trim().parse::<u32>() {
            Ok(total) if (1..=MAX_TOTAL_TICKETS).contains(&total) => Some(total),
            _ => {
                errors.add(
                    "totalTickets",
                    FieldError::OutOfRange {
                        min: "1".to_string(),
                        max: MAX_TOTAL_TICKETS.to_string(),
                    },
                );
                None
            }
        }
    }

    fn parse_date(errors: &mut FormErrors, field: &str, value: &str) -> Option<OffsetDateTime> {
        if !validators::required(errors, field, value) {
            return None;
        }

        match OffsetDateTime::parse(value.trim(), &Rfc3339) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.add(field, FieldError::InvalidDate);
                None
            }
        }
    }
}
