pub mod anchor_link;
pub mod appointment_form;
pub mod contact_form;
pub mod date_picker;
pub mod field_error;
pub mod footer;
pub mod greeting_banner;
pub mod header;
pub mod nav_link;
pub mod partner_logos;
pub mod skip_link;
