mod ledger;
mod session;
