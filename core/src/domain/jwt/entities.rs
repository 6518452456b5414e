use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token lifetime in days.
pub const TOKEN_TTL_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: Uuid,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn claims_round_trip_through_json() {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: Uuid::new_v4(),
            email: "ada@example.com".to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };
        let json = serde_json::to_string(&claims).unwrap();
        let decoded: JwtClaims = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, claims);
        assert!(decoded.exp > decoded.iat);
    }
}
