mod errors;
mod layout;
mod stylesheet;
