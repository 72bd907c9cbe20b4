//! HTML pages
//!
//! Renders the handful of pages the server serves. These are deliberately
//! plain: a landing page, the two credential forms with an error slot, the
//! dashboard greeting, and a 404 page.

/// Wraps page content in the shared document shell.
fn shell(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{} - Gatehouse</title></head>\n<body>\n{}\n</body>\n</html>\n",
        title, content
    )
}

/// Renders the error slot shown above a redisplayed form.
fn error_slot(error: &str) -> String {
    if error.is_empty() {
        String::new()
    } else {
        format!("<p class=\"error\">{}</p>\n", error)
    }
}

pub fn index() -> String {
    shell(
        "Welcome",
        "<h1>Gatehouse</h1>\n\
         <p><a href=\"/register\">Register</a> | <a href=\"/login\">Login</a></p>",
    )
}

pub fn register_form(error: &str) -> String {
    let content = format!(
        "<h2>Register</h2>\n{}\
         <form method=\"post\" action=\"/register\">\n\
         <label>Email <input type=\"email\" name=\"email\"></label>\n\
         <label>Password <input type=\"password\" name=\"password\"></label>\n\
         <button type=\"submit\">Register</button>\n\
         </form>\n\
         <p><a href=\"/login\">Already have an account? Login</a></p>",
        error_slot(error)
    );
    shell("Register", &content)
}

pub fn login_form(error: &str) -> String {
    let content = format!(
        "<h2>Login</h2>\n{}\
         <form method=\"post\" action=\"/login\">\n\
         <label>Email <input type=\"email\" name=\"email\"></label>\n\
         <label>Password <input type=\"password\" name=\"password\"></label>\n\
         <button type=\"submit\">Login</button>\n\
         </form>\n\
         <p><a href=\"/register\">Need an account? Register</a></p>",
        error_slot(error)
    );
    shell("Login", &content)
}

pub fn dashboard(identity: &str) -> String {
    let content = format!(
        "<h2>Dashboard</h2><p>Welcome, {}</p><p><a href=\"/logout\">Logout</a></p>",
        identity
    );
    shell("Dashboard", &content)
}

pub fn not_found() -> String {
    shell("Not Found", "<h2>404</h2><p><a href=\"/\">Back home</a></p>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forms_render_error_slot() {
        assert!(!register_form("").contains("class=\"error\""));
        assert!(register_form("User already exists.").contains("User already exists."));
        assert!(login_form("Invalid credentials.").contains("Invalid credentials."));
    }

    #[test]
    fn test_dashboard_greets_identity() {
        let page = dashboard("alice@example.com");
        assert!(page.contains("Welcome, alice@example.com"));
        assert!(page.contains("/logout"));
    }
}
