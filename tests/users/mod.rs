mod create;
mod email_verification;
mod get;
mod integration;
mod login;
mod update;
