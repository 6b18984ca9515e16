mod helper_constants;
pub mod phoneformatter;

pub use phoneformatter::{PhoneFormatter, format_phone_number, strip_to_digits};
pub use helper_constants::MAX_FORMATTED_DIGITS;
