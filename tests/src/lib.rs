mod admin;
mod checkout;
