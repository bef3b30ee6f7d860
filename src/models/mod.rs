pub mod booking;

pub use booking::{
    BookingForm, BookingRequest, ErrorKind, Field, FieldError, RelayBooking, ServiceType, TimeSlot,
};
