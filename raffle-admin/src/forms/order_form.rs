use super::{validators, FieldError, FormErrors};
use crate::dto::{
    output::{CreateOrderRequest, CustomerData},
    PaymentMethod,
};

pub const CUSTOMER_PREFIX: &str = "customer.";

///
/// Order creation form. Tickets come from the selection,
/// the form holds customer and payment data.
///
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub payment_method: Option<PaymentMethod>,
    pub notes: String,
}

impl OrderForm {
    pub const FIELDS: &'static [&'static str] = &[
        "firstName",
        "lastName",
        "email",
        "phoneNumber",
        "paymentMethod",
        "notes",
    ];

    pub fn validate(
        &self,
        cart_id: i64,
        raffle_id: i64,
        ticket_ids: Vec<i64>,
    ) -> Result<CreateOrderRequest, FormErrors> {
        let mut errors = FormErrors::new();
        validators::required_text(&mut errors, "firstName", &self.first_name, 50);
        validators::required_text(&mut errors, "lastName", &self.last_name, 50);
        validators::optional_email(&mut errors, "email", &self.email);
        validators::optional_phone(&mut errors, "phoneNumber", &self.phone_number);
        if self.payment_method.is_none() {
            errors.add("paymentMethod", FieldError::Required);
        }
        if self.notes.trim().chars().count() > 500 {
            errors.add("notes", FieldError::MaxLength(500));
        }
        if ticket_ids.is_empty() {
            errors.set_global("Please select at least one ticket.");
        }

        let Some(payment_method) = self.payment_method.filter(|_| errors.is_empty()) else {
            return Err(errors);
        };

        Ok(CreateOrderRequest {
            cart_id,
            raffle_id,
            customer: CustomerData {
                first_name: self.first_name.trim().to_string(),
                last_name: self.last_name.trim().to_string(),
                email: validators::optional(&self.email),
                phone_number: validators::optional(&self.phone_number),
            },
            payment_method,
            ticket_ids,
            notes: validators::optional(&self.notes),
        })
    }
}
