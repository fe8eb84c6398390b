//! Construction of signed requests

use crate::crypto::{payment_token, Signer};
use crate::transform::{normalize_country, substring, to_minor_units};
use crate::types::{fields, FieldMap, FieldValue};
use crate::{Result, VerifoneError};
use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;

/// Wire format of every timestamp field
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Maximum number of basket items per payment
pub const MAX_BASKET_ITEMS: usize = 50;

/// Format a timestamp as `yyyy-MM-dd HH:mm:ss`
pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Request id: `yyyyMMddHHmmss` followed by a random number below 99999.
///
/// Uniqueness is best effort only.
pub fn generate_request_id(time: &DateTime<Utc>) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..99999);
    format!("{}{}", time.format("%Y%m%d%H%M%S"), suffix)
}

/// Merchant metadata sent with every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMetadata {
    pub agreement_code: String,
    pub software_name: String,
    pub software_version: String,
    pub interface_version: String,
}

impl RequestMetadata {
    /// Protocol metadata for one request at `time`
    pub fn base_fields(&self, time: &DateTime<Utc>) -> FieldMap {
        FieldMap::new()
            .with(fields::REQUEST_ID, generate_request_id(time))
            .with(fields::REQUEST_TIMESTAMP, format_timestamp(time))
            .with(fields::MERCHANT_AGREEMENT_CODE, &self.agreement_code)
            .with(fields::SOFTWARE, &self.software_name)
            .with(fields::SOFTWARE_VERSION, &self.software_version)
            .with(fields::INTERFACE_VERSION, &self.interface_version)
    }
}

/// Merge `options` over the base metadata and attach both signatures
pub fn build_request(
    metadata: &RequestMetadata,
    options: FieldMap,
    signer: &Signer,
    time: &DateTime<Utc>,
) -> Result<FieldMap> {
    let mut request = metadata.base_fields(time);
    request.merge(options);

    signer.sign_fields(&request)?.attach(&mut request);
    Ok(request)
}

/// One line of a shopping basket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketItem {
    /// Product name, cut to 30 characters
    pub name: String,
    /// Number of units
    pub pieces: i64,
    /// VAT percentage, e.g. `24.00`
    pub vat: Decimal,
    /// Discount percentage, zero when absent
    pub discount: Option<Decimal>,
    /// Gross amount including tax and discount
    pub amount_gross: Option<Decimal>,
    /// Net amount, unit cost times unit count
    pub amount_net: Option<Decimal>,
    /// Unit cost with tax and discount; mutually exclusive with `unit_cost`
    pub unit_cost_gross: Option<Decimal>,
    /// Unit cost without tax and discount
    pub unit_cost: Option<Decimal>,
}

impl BasketItem {
    /// Create an item with the mandatory fields
    pub fn new(name: impl Into<String>, pieces: i64, vat: Decimal) -> Self {
        Self {
            name: name.into(),
            pieces,
            vat,
            discount: None,
            amount_gross: None,
            amount_net: None,
            unit_cost_gross: None,
            unit_cost: None,
        }
    }

    pub fn with_discount(mut self, discount: Decimal) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn with_amount_gross(mut self, amount: Decimal) -> Self {
        self.amount_gross = Some(amount);
        self
    }

    pub fn with_amount_net(mut self, amount: Decimal) -> Self {
        self.amount_net = Some(amount);
        self
    }

    pub fn with_unit_cost_gross(mut self, amount: Decimal) -> Self {
        self.unit_cost_gross = Some(amount);
        self
    }

    pub fn with_unit_cost(mut self, amount: Decimal) -> Self {
        self.unit_cost = Some(amount);
        self
    }

    fn write_fields(&self, index: usize, out: &mut FieldMap) -> Result<()> {
        let name = |field: &str| fields::indexed(field, index);

        out.insert(name(fields::BASKET_NAME), substring(&self.name, 30));
        out.insert(name(fields::BASKET_UNIT_COUNT), self.pieces);
        out.insert(name(fields::BASKET_VAT_PERCENTAGE), to_minor_units(self.vat)?);
        out.insert(
            name(fields::BASKET_DISCOUNT_PERCENTAGE),
            to_minor_units(self.discount.unwrap_or_default())?,
        );

        let amounts = [
            (fields::BASKET_NET_AMOUNT, self.amount_net),
            (fields::BASKET_GROSS_AMOUNT, self.amount_gross),
            (fields::BASKET_UNIT_GROSS_COST, self.unit_cost_gross),
            (fields::BASKET_UNIT_COST, self.unit_cost),
        ];
        for (field, amount) in amounts {
            if let Some(amount) = amount {
                out.insert(name(field), to_minor_units(amount)?);
            }
        }
        Ok(())
    }
}

/// Flatten basket items into indexed fields, in input order
pub fn basket_fields(items: &[BasketItem]) -> Result<FieldMap> {
    if items.len() > MAX_BASKET_ITEMS {
        return Err(VerifoneError::invalid_payment_data(format!(
            "at most {} basket items are supported, got {}",
            MAX_BASKET_ITEMS,
            items.len()
        )));
    }

    let mut out = FieldMap::new();
    for (index, item) in items.iter().enumerate() {
        item.write_fields(index, &mut out)?;
    }
    Ok(out)
}

/// Return URLs of the hosted payment page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnUrls {
    pub cancel: String,
    pub error: String,
    pub expired: String,
    pub rejected: String,
    pub success: String,
    /// Delayed server-to-server success notification
    pub success_server: String,
}

/// Input for a browser-redirect payment form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentData {
    pub order_number: String,
    /// One of fi_FI, sv_SE, no_NO, dk_DK, sv_FI, en_GB
    pub locale: String,
    pub amount_gross: Option<Decimal>,
    pub amount_net: Option<Decimal>,
    pub vat_amount: Option<Decimal>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    /// Alpha-2 or numeric ISO 3166 code
    pub country: Option<String>,
    pub style: Option<String>,
    pub urls: ReturnUrls,
    pub note: Option<String>,
    /// 0 normal, 1 save on success, 2 save only, 3 disable saving
    pub save_method: Option<i64>,
    pub customer_id: Option<String>,
    pub payment_method: Option<String>,
    pub skip_confirmation: Option<i64>,
    pub products: Vec<BasketItem>,
    /// Defaults to the build time
    pub payment_timestamp: Option<String>,
    /// Defaults to the build time
    pub order_timestamp: Option<String>,
    pub dynamic_feedback: Option<String>,
}

impl PaymentData {
    /// Create payment data with the mandatory fields
    pub fn new(
        order_number: impl Into<String>,
        locale: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        urls: ReturnUrls,
    ) -> Self {
        Self {
            order_number: order_number.into(),
            locale: locale.into(),
            amount_gross: None,
            amount_net: None,
            vat_amount: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: None,
            address: None,
            address2: None,
            address3: None,
            city: None,
            postal_code: None,
            country: None,
            style: None,
            urls,
            note: None,
            save_method: None,
            customer_id: None,
            payment_method: None,
            skip_confirmation: None,
            products: Vec::new(),
            payment_timestamp: None,
            order_timestamp: None,
            dynamic_feedback: None,
        }
    }
}

/// Build the signed field set for a browser payment form.
///
/// `currency_numeric` is the numeric ISO 4217 code of the order.
pub fn build_payment_data(
    metadata: &RequestMetadata,
    currency_numeric: &str,
    data: &PaymentData,
    signer: &Signer,
    time: &DateTime<Utc>,
) -> Result<FieldMap> {
    let now = format_timestamp(time);
    let payment_timestamp = data.payment_timestamp.clone().unwrap_or_else(|| now.clone());
    let order_timestamp = data.order_timestamp.clone().unwrap_or(now);

    let token = payment_token(&metadata.agreement_code, &data.order_number, &payment_timestamp);

    let mut values = FieldMap::new()
        .with(fields::PAYMENT_TOKEN, token)
        .with(fields::PAYMENT_LOCALE, &data.locale)
        .with(fields::PAYMENT_TIMESTAMP, payment_timestamp)
        .with(fields::ORDER_TIMESTAMP, order_timestamp)
        .with(fields::MERCHANT_AGREEMENT_CODE, &metadata.agreement_code)
        .with(fields::ORDER_NUMBER, &data.order_number)
        .with(fields::ORDER_CURRENCY_CODE, currency_numeric)
        // a payment may mix several VAT rates
        .with(fields::ORDER_VAT_PERCENTAGE, "")
        .with(fields::BUYER_FIRST_NAME, substring(&data.first_name, 30))
        .with(fields::BUYER_LAST_NAME, substring(&data.last_name, 30))
        .with(fields::BUYER_EMAIL, substring(&data.email, 100))
        .with(fields::STYLE_CODE, data.style.clone().unwrap_or_default())
        .with(fields::CANCEL_URL, &data.urls.cancel)
        .with(fields::ERROR_URL, &data.urls.error)
        .with(fields::EXPIRED_URL, &data.urls.expired)
        .with(fields::REJECTED_URL, &data.urls.rejected)
        .with(fields::SUCCESS_URL, &data.urls.success)
        .with(fields::SERVER_SUCCESS_URL, &data.urls.success_server)
        .with(fields::SOFTWARE, &metadata.software_name)
        .with(fields::SOFTWARE_VERSION, &metadata.software_version)
        .with(fields::INTERFACE_VERSION, &metadata.interface_version)
        .with(
            fields::SKIP_CONFIRMATION_PAGE,
            data.skip_confirmation.unwrap_or(0),
        );

    let amounts = [
        (fields::ORDER_GROSS_AMOUNT, data.amount_gross),
        (fields::ORDER_NET_AMOUNT, data.amount_net),
        (fields::ORDER_VAT_AMOUNT, data.vat_amount),
    ];
    for (field, amount) in amounts {
        if let Some(amount) = amount {
            values.insert(field, to_minor_units(amount)?);
        }
    }

    let short_fields = [
        (fields::BUYER_PHONE, data.phone.as_deref()),
        (fields::DELIVERY_LINE_ONE, data.address.as_deref()),
        (fields::DELIVERY_LINE_TWO, data.address2.as_deref()),
        (fields::DELIVERY_LINE_THREE, data.address3.as_deref()),
        (fields::DELIVERY_CITY, data.city.as_deref()),
        (fields::DELIVERY_POSTAL_CODE, data.postal_code.as_deref()),
        (fields::PAYMENT_METHOD_CODE, data.payment_method.as_deref()),
    ];
    for (field, value) in short_fields {
        if let Some(value) = value {
            values.insert(field, substring(value, 30));
        }
    }
    if let Some(save_method) = data.save_method {
        values.insert(fields::SAVE_PAYMENT_METHOD, substring(save_method, 30));
    }

    if let Some(country) = &data.country {
        values.insert(
            fields::DELIVERY_COUNTRY_CODE,
            normalize_country(&FieldValue::from(country))?,
        );
    }

    let long_fields = [
        (fields::BUYER_EXTERNAL_ID, data.customer_id.as_deref(), 255),
        (fields::ORDER_NOTE, data.note.as_deref(), 36),
        (fields::DYNAMIC_FEEDBACK, data.dynamic_feedback.as_deref(), 1024),
    ];
    for (field, value, max_len) in long_fields {
        if let Some(value) = value {
            values.insert(field, substring(value, max_len));
        }
    }

    values.merge(basket_fields(&data.products)?);

    signer.sign_fields(&values)?.attach(&mut values);
    tracing::debug!(order_number = %data.order_number, fields = values.len(), "Generated payment data");

    Ok(values)
}
