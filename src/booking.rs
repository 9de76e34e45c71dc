//! Service booking flow.
//!
//! Bookings land in the same append-only log as product orders, with the
//! service title as the summary line and a quote-pending price. Availability
//! is a pure date-listing helper, never persisted.

use jiff::{
    Span,
    civil::{Date, Weekday},
};
use thiserror::Error;

use crate::{
    notify::{Notification, NotificationSink},
    orders::{NewOrder, OrderLog, OrderPrice, OrderRecord},
    storage::{KeyValueStore, StorageError},
};

/// Bookable time slots offered every working day.
pub const AVAILABLE_TIMES: [&str; 7] = [
    "10:00", "11:00", "12:00", "14:00", "15:00", "16:00", "17:00",
];

/// Fallback summary line when no specific service was picked.
pub const GENERAL_CONSULTATION: &str = "General Consultation";

/// A service booking form, as filled in by the visitor.
#[derive(Debug, Clone, Default)]
pub struct BookingRequest {
    /// Title of the chosen service; empty means a general consultation.
    pub service: String,
    /// Visitor name. Required.
    pub name: String,
    /// Visitor email. Required.
    pub email: String,
    /// Visitor phone. Required.
    pub phone: String,
    /// Vehicle details (year, make, model). Optional.
    pub vehicle_info: String,
    /// Additional notes. Optional.
    pub notes: String,
    /// Uploaded reference photo, by file name only. Optional.
    pub uploaded_image: Option<String>,
    /// Chosen date. Must be selected before submitting.
    pub date: Option<Date>,
    /// Chosen time slot. Must be selected before submitting.
    pub time: Option<String>,
}

/// Errors from the booking flow.
#[derive(Debug, Error)]
pub enum BookingError {
    /// No date or time slot was selected.
    #[error("a date and time must be selected")]
    MissingSlot,

    /// Name, email or phone was left blank.
    #[error("name, email and phone are required")]
    MissingFields,

    /// The booking could not be persisted.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Dates open for booking: the next 30 days after `today`, Sundays excluded.
///
/// Pure and non-persisted; the storefront recomputes this on demand.
#[must_use]
pub fn available_dates(today: Date) -> Vec<Date> {
    (1_i64..=30)
        .filter_map(|days| today.checked_add(Span::new().days(days)).ok())
        .filter(|date| date.weekday() != Weekday::Sunday)
        .collect()
}

/// Validate a booking request and append it to the order log.
///
/// Returns the stamped order record.
///
/// # Errors
///
/// - [`BookingError::MissingSlot`]: no date or time selected; the log is
///   untouched.
/// - [`BookingError::MissingFields`]: name, email or phone blank; the log is
///   untouched.
/// - [`BookingError::Storage`]: the append failed.
pub fn book_service<S: KeyValueStore>(
    request: &BookingRequest,
    orders: &mut OrderLog<S>,
    sink: &dyn NotificationSink,
) -> Result<OrderRecord, BookingError> {
    let (Some(date), Some(time)) = (request.date, request.time.as_deref()) else {
        sink.notify(Notification::error("Please select a date and time."));
        return Err(BookingError::MissingSlot);
    };

    if request.name.trim().is_empty()
        || request.email.trim().is_empty()
        || request.phone.trim().is_empty()
    {
        sink.notify(Notification::error("Please fill all required fields."));
        return Err(BookingError::MissingFields);
    }

    let service = if request.service.is_empty() {
        GENERAL_CONSULTATION.to_owned()
    } else {
        request.service.clone()
    };

    let record = orders.append(NewOrder {
        customer_name: request.name.clone(),
        item_or_service: service,
        delivery_address: "N/A - Service".to_owned(),
        preferred_date_time: format!("{date} at {time}"),
        price: OrderPrice::quote_pending(),
        items: None,
        vehicle_info: non_empty(&request.vehicle_info),
        notes: non_empty(&request.notes),
        uploaded_image: Some(
            request
                .uploaded_image
                .clone()
                .unwrap_or_else(|| "No image".to_owned()),
        ),
    })?;

    sink.notify(Notification::success(
        "Booking request sent!",
        "We've received your request and will confirm shortly.",
    ));

    Ok(record)
}

/// Build the multi-line booking summary handed to the messaging
/// collaborator.
#[must_use]
pub fn booking_summary(request: &BookingRequest, record: &OrderRecord) -> String {
    let mut message = String::from("New Service Booking:\n");
    message.push_str(&format!("Service: {}\n", record.item_or_service));
    message.push_str(&format!("Date & Time: {}\n", record.preferred_date_time));
    message.push_str(&format!("Name: {}\n", record.customer_name));
    message.push_str(&format!("Email: {}\n", request.email));
    message.push_str(&format!("Phone: {}\n", request.phone));

    if let Some(vehicle) = &record.vehicle_info {
        message.push_str(&format!("Vehicle: {vehicle}\n"));
    }
    if let Some(image) = &request.uploaded_image {
        message.push_str(&format!("Image Uploaded: {image}\n"));
    }

    message
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;
    use crate::{
        notify::{NoopSink, RecordingSink},
        storage::MemoryStore,
    };

    fn request() -> BookingRequest {
        BookingRequest {
            service: "Vehicle Wrap".to_owned(),
            name: "Asha".to_owned(),
            email: "asha@example.com".to_owned(),
            phone: "+911234567890".to_owned(),
            vehicle_info: "2019 Swift".to_owned(),
            notes: String::new(),
            uploaded_image: None,
            date: Some(date(2026, 9, 3)),
            time: Some("11:00".to_owned()),
        }
    }

    fn open_log(store: MemoryStore) -> OrderLog<MemoryStore> {
        OrderLog::new(store, Arc::new(NoopSink))
    }

    #[test]
    fn available_dates_skip_sundays() {
        // 2026-08-29 is a Saturday; the 30-day window holds five Sundays.
        let dates = available_dates(date(2026, 8, 29));

        assert_eq!(dates.len(), 25);
        assert!(
            dates.iter().all(|d| d.weekday() != Weekday::Sunday),
            "no Sunday may be bookable"
        );
        // Tomorrow is one of those Sundays, so Monday opens the window.
        assert_eq!(dates.first(), Some(&date(2026, 8, 31)));
    }

    #[test]
    fn available_dates_start_tomorrow() {
        let dates = available_dates(date(2026, 8, 31));

        assert_eq!(dates.first(), Some(&date(2026, 9, 1)));
        assert!(!dates.contains(&date(2026, 8, 31)), "today is never open");
    }

    #[test]
    fn booking_lands_in_the_order_log() -> TestResult {
        let store = MemoryStore::new();
        let mut orders = open_log(store.clone());

        let record = book_service(&request(), &mut orders, &NoopSink)?;

        assert_eq!(record.item_or_service, "Vehicle Wrap");
        assert_eq!(record.delivery_address, "N/A - Service");
        assert_eq!(record.preferred_date_time, "2026-09-03 at 11:00");
        assert_eq!(record.price, OrderPrice::quote_pending());
        assert_eq!(record.vehicle_info.as_deref(), Some("2019 Swift"));
        assert_eq!(record.uploaded_image.as_deref(), Some("No image"));

        assert_eq!(open_log(store).list_all()?.len(), 1);
        Ok(())
    }

    #[test]
    fn empty_service_becomes_general_consultation() -> TestResult {
        let mut orders = open_log(MemoryStore::new());
        let record = book_service(
            &BookingRequest {
                service: String::new(),
                ..request()
            },
            &mut orders,
            &NoopSink,
        )?;

        assert_eq!(record.item_or_service, GENERAL_CONSULTATION);
        Ok(())
    }

    #[test]
    fn missing_slot_is_rejected_before_the_log() -> TestResult {
        let mut orders = open_log(MemoryStore::new());
        let sink = RecordingSink::new();

        let result = book_service(
            &BookingRequest {
                time: None,
                ..request()
            },
            &mut orders,
            &sink,
        );

        assert!(matches!(result, Err(BookingError::MissingSlot)));
        assert!(orders.list_all()?.is_empty(), "log must stay untouched");
        assert_eq!(sink.titles(), vec!["Please select a date and time."]);
        Ok(())
    }

    #[test]
    fn missing_contact_fields_are_rejected() -> TestResult {
        let mut orders = open_log(MemoryStore::new());

        let result = book_service(
            &BookingRequest {
                phone: "  ".to_owned(),
                ..request()
            },
            &mut orders,
            &NoopSink,
        );

        assert!(matches!(result, Err(BookingError::MissingFields)));
        assert!(orders.list_all()?.is_empty(), "log must stay untouched");
        Ok(())
    }

    #[test]
    fn summary_names_the_booking_details() -> TestResult {
        let mut orders = open_log(MemoryStore::new());
        let req = request();
        let record = book_service(&req, &mut orders, &NoopSink)?;

        let message = booking_summary(&req, &record);

        assert!(message.starts_with("New Service Booking:"));
        assert!(message.contains("Service: Vehicle Wrap"), "missing service");
        assert!(
            message.contains("Date & Time: 2026-09-03 at 11:00"),
            "missing slot"
        );
        assert!(message.contains("Vehicle: 2019 Swift"), "missing vehicle");
        Ok(())
    }
}
