use crate::common::User;

/// Build-time credential record.
struct Account {
    id: u32,
    name: &'static str,
    password: &'static str,
}

/// The only accounts this app knows about. There is no user registration.
const ACCOUNTS: [Account; 2] = [
    Account {
        id: 1,
        name: "Nabil",
        password: "1234",
    },
    Account {
        id: 2,
        name: "Ahmed",
        password: "1234",
    },
];

pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Exact-match linear search over the static account list. Returns the
/// session identity on success. Wrong name and wrong password are not
/// distinguished.
pub fn authenticate(username: &str, password: &str) -> Option<User> {
    ACCOUNTS
        .iter()
        .find(|account| account.name == username && account.password == password)
        .map(|account| User {
            id: account.id,
            name: account.name.to_string(),
        })
}
