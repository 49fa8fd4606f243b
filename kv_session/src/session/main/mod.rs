mod cookie;
mod csrf;
mod session;

#[cfg(test)]
mod test_utils;

pub use session::Session;
