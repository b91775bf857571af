//! Sale submission assembly
//!
//! Holds the new-sale form state, validates every precondition before any
//! network call, and assembles the single `POST /sales` payload. Validation
//! failures are user-correctable: the form keeps its entered values and no
//! request is issued.

use chrono::NaiveDate;
use thiserror::Error;

use crate::nozzle::{NozzleUnresolved, resolve_nozzle};
use crate::services::SaleService;
use crate::session::Session;
use crate::{ClientError, HttpClient};
use shared::models::customer::Customer;
use shared::models::payment::PaymentMethod;
use shared::models::product::Product;
use shared::models::pump::{Nozzle, Pump};
use shared::models::sale::{Sale, SaleStatus};
use shared::pricing::{self, EntryMode, PricingInput, PricingResult};
use shared::request::CreateSaleRequest;

/// Validation failures detected before submission. None of these reach the
/// network; all are surfaced inline and the form stays editable.
#[derive(Debug, Error)]
pub enum SaleFormError {
    #[error("No authenticated user, sign in again")]
    NotAuthenticated,

    #[error("Select a product")]
    NoProduct,

    #[error("Select a pump")]
    NoPump,

    #[error("Quantity must be greater than zero")]
    InvalidQuantity,

    #[error("Select a client for the credit sale")]
    NoClient,

    #[error("Enter a due date for the credit sale")]
    NoDueDate,

    /// Configuration problem: submission is blocked, not correctable inline
    #[error(transparent)]
    Nozzle(#[from] NozzleUnresolved),
}

/// Errors from a submission attempt
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Rejected before any network call
    #[error(transparent)]
    Form(#[from] SaleFormError),

    /// The request was sent and failed; the server message is preserved
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// New-sale form state
#[derive(Debug, Clone, Default)]
pub struct SaleForm {
    pub entry_mode: EntryMode,
    /// Gallons entered (Gallons mode)
    pub quantity: f64,
    /// Gross amount entered (Amount mode)
    pub manual_amount: f64,
    pub discount: f64,
    pub payment_method: PaymentMethod,
    pub product: Option<Product>,
    pub pump: Option<Pump>,
    /// Explicit nozzle selection, when the operator made one
    pub nozzle: Option<Nozzle>,
    pub customer: Option<Customer>,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl SaleForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the payment method. Selecting credit defaults the due date to
    /// today + 30 days; any other method clears it.
    pub fn select_payment_method(&mut self, method: PaymentMethod, today: NaiveDate) {
        self.payment_method = method;
        self.due_date = method.default_due_date(today);
    }

    /// Current derived pricing, recomputed from scratch on every call
    pub fn pricing(&self) -> PricingResult {
        pricing::reconcile(&self.pricing_input())
    }

    fn pricing_input(&self) -> PricingInput {
        let (unit_price, fuel) = match &self.product {
            Some(p) => (p.unit_price, p.fuel),
            None => (0.0, Default::default()),
        };
        PricingInput {
            entry_mode: self.entry_mode,
            quantity: self.quantity,
            manual_amount: self.manual_amount,
            unit_price,
            discount: self.discount,
            fuel,
        }
    }

    /// Validate every precondition and assemble the outbound payload.
    /// Checks run in a fixed order; the first failure wins.
    pub fn assemble(&self, session: Option<&Session>) -> Result<CreateSaleRequest, SaleFormError> {
        let session = session.ok_or(SaleFormError::NotAuthenticated)?;

        let product = self.product.as_ref().ok_or(SaleFormError::NoProduct)?;
        let pump = self.pump.as_ref().ok_or(SaleFormError::NoPump)?;

        let result = self.pricing();
        if result.quantity <= 0.0 {
            return Err(SaleFormError::InvalidQuantity);
        }

        let client_id = if self.payment_method.is_credit() {
            let customer = self.customer.as_ref().ok_or(SaleFormError::NoClient)?;
            if self.due_date.is_none() {
                return Err(SaleFormError::NoDueDate);
            }
            Some(customer.id)
        } else {
            None
        };

        let nozzle_id = resolve_nozzle(self.nozzle.as_ref(), pump, product.id)?;

        Ok(CreateSaleRequest {
            user_id: session.user_id(),
            client_id,
            nozzle_id,
            quantity: pricing::round_quantity(result.quantity),
            total_amount: pricing::round_money(result.subtotal),
            final_amount: pricing::round_money(result.final_payable),
            payment_method_id: self.payment_method.id(),
            payment_method: self.payment_method.wire_name().to_string(),
            status: SaleStatus::Completed,
            discount_amount: (self.discount > 0.0).then(|| pricing::round_money(self.discount)),
            due_date: self.payment_method.is_credit().then(|| self.due_date).flatten(),
            notes: self.notes.clone(),
        })
    }

    /// Validate and submit the sale: exactly one creation request, and only
    /// after every precondition passes. On success the entry fields reset;
    /// on failure the form keeps its values for correction.
    pub async fn submit(
        &mut self,
        session: Option<&Session>,
        http: &HttpClient,
    ) -> Result<Sale, SubmitError> {
        let request = self.assemble(session)?;
        let sale = SaleService::new(http).create(&request).await?;
        self.reset_entry();
        Ok(sale)
    }

    /// Clear the entered values after a successful submission. The pump and
    /// product selection survive for the next sale.
    pub fn reset_entry(&mut self) {
        self.entry_mode = EntryMode::Gallons;
        self.quantity = 0.0;
        self.manual_amount = 0.0;
        self.discount = 0.0;
        self.payment_method = PaymentMethod::Cash;
        self.customer = None;
        self.due_date = None;
        self.notes = None;
        self.nozzle = None;
    }
}
