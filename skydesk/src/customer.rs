//! Customer records, discount tiers and their store.

mod store;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::flight::{parse_digits, FlightNumber};
use crate::storage::check_text_field;

pub use store::{CustomerId, CustomerStore};

/// A passport number, the unique key of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Passport(u32);

impl Passport {
    /// Wraps a raw passport number.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying number.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Passport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Passport {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_digits(s).map(Self).ok_or_else(|| Error::Validation {
            field: "passport".into(),
            message: format!("'{s}' is not a non-negative integer"),
        })
    }
}

/// The fixed discount tiers.
///
/// Each tier has a persisted code (0-4, in declaration order) and a whole
/// percentage taken off every fare.
///
/// # Examples
///
/// ```
/// use skydesk::DiscountTier;
///
/// assert_eq!(DiscountTier::Student.percent(), 15);
/// assert_eq!(DiscountTier::Student.apply(400), 340);
/// assert_eq!(DiscountTier::from_code(4), Some(DiscountTier::FrequentFlyer));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiscountTier {
    /// No discount.
    #[default]
    None,
    /// Student, 15%.
    Student,
    /// Senior, 20%.
    Senior,
    /// Military, 10%.
    Military,
    /// Frequent flyer, 25%.
    FrequentFlyer,
}

impl DiscountTier {
    /// Every tier in code order.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Student,
        Self::Senior,
        Self::Military,
        Self::FrequentFlyer,
    ];

    /// The persisted code of this tier.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Student => 1,
            Self::Senior => 2,
            Self::Military => 3,
            Self::FrequentFlyer => 4,
        }
    }

    /// Looks up a tier by persisted code.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Percentage taken off the fare.
    #[must_use]
    pub const fn percent(self) -> i64 {
        match self {
            Self::None => 0,
            Self::Student => 15,
            Self::Senior => 20,
            Self::Military => 10,
            Self::FrequentFlyer => 25,
        }
    }

    /// Applies the discount to `amount`, truncating toward zero.
    ///
    /// The intermediate product saturates instead of overflowing; every
    /// fare a flight can produce stays far below that bound.
    #[must_use]
    pub const fn apply(self, amount: i64) -> i64 {
        amount.saturating_mul(100 - self.percent()) / 100
    }
}

impl fmt::Display for DiscountTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Student => "student",
            Self::Senior => "senior",
            Self::Military => "military",
            Self::FrequentFlyer => "frequent-flyer",
        };
        f.write_str(name)
    }
}

impl FromStr for DiscountTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tier| tier.to_string() == lowered)
            .ok_or_else(|| Error::Validation {
                field: "discount".into(),
                message: format!("'{s}' is not a discount tier"),
            })
    }
}

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    passport: Passport,
    name: String,
    surname: String,
    nationality: String,
    address: String,
    phone: String,
    discount: DiscountTier,
    total_spent: i64,
    bookings: Vec<FlightNumber>,
}

impl Customer {
    /// Rebuilds a customer from persisted parts.
    ///
    /// Repeated flight numbers in `bookings` are collapsed to their first
    /// occurrence.
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`CustomerSpec::build`].
    pub fn restore(
        spec: CustomerSpec,
        total_spent: i64,
        bookings: impl IntoIterator<Item = FlightNumber>,
    ) -> Result<Self> {
        let mut customer = spec.build()?;
        customer.total_spent = total_spent;
        for flight in bookings {
            if !customer.bookings.contains(&flight) {
                customer.bookings.push(flight);
            }
        }
        Ok(customer)
    }

    /// Passport number.
    #[must_use]
    pub const fn passport(&self) -> Passport {
        self.passport
    }

    /// First name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Family name.
    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Nationality.
    #[must_use]
    pub fn nationality(&self) -> &str {
        &self.nationality
    }

    /// Postal address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Phone number, digits only.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Discount tier.
    #[must_use]
    pub const fn discount(&self) -> DiscountTier {
        self.discount
    }

    /// Accumulated spend; negative once refunds exceed payments.
    #[must_use]
    pub const fn total_spent(&self) -> i64 {
        self.total_spent
    }

    /// Booked flights in booking order.
    #[must_use]
    pub fn bookings(&self) -> &[FlightNumber] {
        &self.bookings
    }

    /// Returns `true` if the customer holds a booking on `flight`.
    #[must_use]
    pub fn has_booking(&self, flight: FlightNumber) -> bool {
        self.bookings.contains(&flight)
    }

    /// Records a booking and charges `price`.
    pub(crate) fn add_booking(&mut self, flight: FlightNumber, price: i64) {
        debug_assert!(!self.has_booking(flight));
        self.bookings.push(flight);
        self.total_spent += price;
    }

    /// Drops the booking on `flight` and credits `refund`.
    ///
    /// Returns `false`, crediting nothing, if there was no such booking.
    pub(crate) fn remove_booking(&mut self, flight: FlightNumber, refund: i64) -> bool {
        let before = self.bookings.len();
        self.bookings.retain(|booked| *booked != flight);
        if self.bookings.len() == before {
            return false;
        }
        self.total_spent -= refund;
        true
    }

    /// Applies the provided fields of `update`, or none of them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a text field cannot be stored.
    pub fn apply_update(&mut self, update: &CustomerUpdate) -> Result<()> {
        let fields = [
            ("name", &update.name),
            ("surname", &update.surname),
            ("nationality", &update.nationality),
            ("address", &update.address),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                check_text_field(field, value)?;
            }
        }
        if let Some(phone) = &update.phone {
            check_phone(phone)?;
        }

        if let Some(name) = &update.name {
            self.name.clone_from(name);
        }
        if let Some(surname) = &update.surname {
            self.surname.clone_from(surname);
        }
        if let Some(nationality) = &update.nationality {
            self.nationality.clone_from(nationality);
        }
        if let Some(address) = &update.address {
            self.address.clone_from(address);
        }
        if let Some(phone) = &update.phone {
            self.phone.clone_from(phone);
        }
        if let Some(discount) = update.discount {
            self.discount = discount;
        }
        Ok(())
    }
}

fn check_phone(phone: &str) -> Result<()> {
    if phone.is_empty() || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Validation {
            field: "phone".into(),
            message: format!("'{phone}' must consist of digits only"),
        });
    }
    Ok(())
}

/// Everything needed to register a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSpec {
    /// Passport number.
    pub passport: Passport,
    /// First name.
    pub name: String,
    /// Family name.
    pub surname: String,
    /// Nationality.
    pub nationality: String,
    /// Postal address.
    pub address: String,
    /// Phone number, digits only.
    pub phone: String,
    /// Discount tier.
    #[serde(default)]
    pub discount: DiscountTier,
}

impl CustomerSpec {
    /// Validates the description and builds a customer with no bookings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn build(self) -> Result<Customer> {
        check_text_field("name", &self.name)?;
        check_text_field("surname", &self.surname)?;
        check_text_field("nationality", &self.nationality)?;
        check_text_field("address", &self.address)?;
        check_phone(&self.phone)?;
        Ok(Customer {
            passport: self.passport,
            name: self.name,
            surname: self.surname,
            nationality: self.nationality,
            address: self.address,
            phone: self.phone,
            discount: self.discount,
            total_spent: 0,
            bookings: Vec::new(),
        })
    }
}

/// A partial change to a customer's contact details or tier.
///
/// Snapshots already sitting in waiting queues keep the old values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerUpdate {
    /// New first name.
    pub name: Option<String>,
    /// New family name.
    pub surname: Option<String>,
    /// New nationality.
    pub nationality: Option<String>,
    /// New address.
    pub address: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New discount tier.
    pub discount: Option<DiscountTier>,
}
