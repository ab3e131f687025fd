use serde::{Deserialize, Serialize};

// ============================================================================
// Role
// ============================================================================

/// Account role. Parsing is case-insensitive; unrecognised values map to
/// `Unknown`, which no view permits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Customer,
    TravelCompany,
    Unknown,
}

impl Role {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "ADMIN" => Role::Admin,
            "CUSTOMER" => Role::Customer,
            "TRAVEL_COMPANY" => Role::TravelCompany,
            _ => Role::Unknown,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Customer => "CUSTOMER",
            Role::TravelCompany => "TRAVEL_COMPANY",
            Role::Unknown => "UNKNOWN",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Customer => "Customer",
            Role::TravelCompany => "Travel Company",
            Role::Unknown => "Unknown",
        }
    }
}

/// Roles a visitor may pick on the sign-up form
pub const REGISTRATION_ROLES: [Role; 2] = [Role::Customer, Role::TravelCompany];

// ============================================================================
// Session
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub name: Option<String>,
    pub role: String,
    pub customer_id: Option<i64>,
}

impl UserInfo {
    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }

    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

/// Token plus profile proving authentication and role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
}

impl Session {
    pub fn role(&self) -> Role {
        self.user.role()
    }

    /// Customer identity used to pre-fill reservation forms.
    /// Falls back to the user id when the profile has no customer id.
    pub fn customer_id(&self) -> Option<i64> {
        self.user
            .customer_id
            .filter(|id| *id > 0)
            .or(Some(self.user.id).filter(|id| *id > 0))
    }
}

// ============================================================================
// Sign in
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

impl SignInRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("Username is required".into());
        }
        if self.password.is_empty() {
            return Err("Password is required".into());
        }
        if self.password.chars().count() < 6 {
            return Err("Password must be at least 6 characters".into());
        }
        Ok(())
    }
}

/// Flat sign-in response: token next to the profile fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignInResponse {
    pub token: Option<String>,
    pub id: i64,
    pub username: String,
    pub name: Option<String>,
    pub role: String,
    pub customer_id: Option<i64>,
}

impl SignInResponse {
    /// Turn the response into a session, rejecting missing tokens and
    /// roles no dashboard serves
    pub fn into_session(self) -> Result<Session, String> {
        let token = self
            .token
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| "No token received".to_string())?;
        if Role::parse(&self.role) == Role::Unknown {
            return Err("Unknown role".into());
        }
        Ok(Session {
            token,
            user: UserInfo {
                id: self.id,
                username: self.username,
                name: self.name,
                role: self.role,
                customer_id: self.customer_id,
            },
        })
    }
}

// ============================================================================
// Sign up
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub username: String,
    pub password: String,
    pub role: String,
}

impl SignUpRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Full name is required".into());
        }
        if !is_valid_email(&self.email) {
            return Err("Valid email is required".into());
        }
        if !is_valid_phone(&self.phone) {
            return Err("Valid phone number is required".into());
        }
        if self.username.trim().is_empty() {
            return Err("Username is required".into());
        }
        if self.password.chars().count() < 6 {
            return Err("Password must be at least 6 characters".into());
        }
        if !REGISTRATION_ROLES.iter().any(|r| r.code() == self.role) {
            return Err("Invalid role selected".into());
        }
        Ok(())
    }
}

/// `local@domain.tld` with no whitespace and a single `@`
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Optional leading `+` followed by 10 to 15 digits
pub fn is_valid_phone(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    (10..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_up() -> SignUpRequest {
        SignUpRequest {
            name: "Nimal Perera".into(),
            email: "nimal@example.com".into(),
            phone: "+94771234567".into(),
            username: "nimal".into(),
            password: "secret1".into(),
            role: "CUSTOMER".into(),
        }
    }

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("Customer"), Role::Customer);
        assert_eq!(Role::parse("travel_company"), Role::TravelCompany);
        assert_eq!(Role::parse("manager"), Role::Unknown);
        assert_eq!(Role::parse(""), Role::Unknown);
    }

    #[test]
    fn test_sign_in_validation() {
        let mut req = SignInRequest {
            username: " ".into(),
            password: "secret1".into(),
        };
        assert_eq!(req.validate().unwrap_err(), "Username is required");
        req.username = "nimal".into();
        req.password = String::new();
        assert_eq!(req.validate().unwrap_err(), "Password is required");
        req.password = "12345".into();
        assert_eq!(
            req.validate().unwrap_err(),
            "Password must be at least 6 characters"
        );
        req.password = "123456".into();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_sign_in_response_into_session() {
        let resp: SignInResponse = serde_json::from_str(
            r#"{"token":"abc","id":4,"username":"nimal","name":"Nimal","role":"customer","customerId":11}"#,
        )
        .unwrap();
        let session = resp.into_session().unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.role(), Role::Customer);
        assert_eq!(session.customer_id(), Some(11));

        let no_token = SignInResponse {
            role: "ADMIN".into(),
            ..Default::default()
        };
        assert_eq!(no_token.into_session().unwrap_err(), "No token received");

        let bad_role = SignInResponse {
            token: Some("t".into()),
            role: "GUEST".into(),
            ..Default::default()
        };
        assert_eq!(bad_role.into_session().unwrap_err(), "Unknown role");
    }

    #[test]
    fn test_customer_id_falls_back_to_user_id() {
        let session = Session {
            token: "t".into(),
            user: UserInfo {
                id: 8,
                username: "a".into(),
                role: "CUSTOMER".into(),
                ..Default::default()
            },
        };
        assert_eq!(session.customer_id(), Some(8));

        let anonymous = Session {
            token: "t".into(),
            user: UserInfo::default(),
        };
        assert_eq!(anonymous.customer_id(), None);
    }

    #[test]
    fn test_email_and_phone() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@c.d"));
        assert!(!is_valid_email("a@.d"));
        assert!(!is_valid_email("a@c."));
        assert!(!is_valid_email("a@b@c.d"));

        assert!(is_valid_phone("0771234567"));
        assert!(is_valid_phone("+940771234567"));
        assert!(!is_valid_phone("077123456"));
        assert!(!is_valid_phone("0771-234567"));
        assert!(!is_valid_phone("+1234567890123456"));
    }

    #[test]
    fn test_sign_up_validation() {
        assert!(sign_up().validate().is_ok());

        let mut r = sign_up();
        r.email = "nimal.example.com".into();
        assert_eq!(r.validate().unwrap_err(), "Valid email is required");

        let mut r = sign_up();
        r.phone = "12345".into();
        assert_eq!(r.validate().unwrap_err(), "Valid phone number is required");

        let mut r = sign_up();
        r.role = "ADMIN".into();
        assert_eq!(r.validate().unwrap_err(), "Invalid role selected");

        let mut r = sign_up();
        r.role = "TRAVEL_COMPANY".into();
        assert!(r.validate().is_ok());
    }

    #[test]
    fn test_admin_cannot_self_register() {
        assert!(!REGISTRATION_ROLES.contains(&Role::Admin));

        let mut r = sign_up();
        r.role = "admin".into();
        assert_eq!(r.validate().unwrap_err(), "Invalid role selected");
    }
}
