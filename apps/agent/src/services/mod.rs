pub mod conversation;
pub mod notify;
pub mod supabase;
