// Cover letters: generate from the user's profile and a job posting, then list/get/delete.

pub mod handlers;
pub mod service;
