// Service exports
pub mod listings;
pub mod mailgun;
pub mod supabase;

pub use listings::{ListingsClient, ListingsError};
pub use mailgun::{EmailMessage, MailgunClient, MailgunError};
pub use supabase::{SupabaseClient, SupabaseError};
