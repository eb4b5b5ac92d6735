pub mod auth_done;
