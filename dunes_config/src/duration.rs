use serde::Deserialize;

/// A duration written as whitespace separated parts like `1d 2h 3m 4s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s)
            .map(Self)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid duration: {s:?}")))
    }
}

fn parse(s: &str) -> Option<std::time::Duration> {
    s.split_whitespace().try_fold(std::time::Duration::ZERO, |acc, part| {
        let (number, unit) = part.split_at(part.find(|c: char| !c.is_ascii_digit())?);
        let number = number.parse::<u64>().ok()?;
        let factor = match unit {
            "s" => 1,
            "m" => 60,
            "h" => 60 * 60,
            "d" => 24 * 60 * 60,
            _ => return None,
        };
        Some(acc + std::time::Duration::from_secs(number.checked_mul(factor)?))
    })
}
