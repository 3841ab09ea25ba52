// Service abstractions the domains depend on instead of the concrete client.

pub mod user_management;
