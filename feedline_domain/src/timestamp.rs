use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Date and time shown next to posts, e.g. `2019/10/12 7:20:50`.
const LOCALE_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]/[month padding:none]/[day padding:none] [hour padding:none]:[minute]:[second]"
);

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Timestamp(pub OffsetDateTime);

impl Timestamp {
    pub fn parse(s: &str) -> Result<Self, time::error::Parse> {
        OffsetDateTime::parse(s, &Rfc3339).map(Timestamp)
    }

    /// Render in the user's local offset, the way the feed displays creation times.
    pub fn to_locale_string(&self, offset: UtcOffset) -> String {
        self.0
            .to_offset(offset)
            .format(LOCALE_FORMAT)
            .unwrap_or_else(|_| self.to_string())
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let formatted = self.0.format(&Rfc3339).map_err(|_| std::fmt::Error)?;
        f.write_str(&formatted)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StrVisitor;

        impl Visitor<'_> for StrVisitor {
            type Value = Timestamp;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.pad("an RFC 3339 timestamp")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Timestamp::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(StrVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::offset;

    #[test]
    fn timestamp_display() {
        let ts = Timestamp::parse("2019-10-12T07:20:50.52Z").unwrap();
        assert_eq!("2019-10-12T07:20:50.52Z", format!("{}", ts));
    }

    #[test]
    fn locale_string_in_utc() {
        let ts = Timestamp::parse("2019-10-02T07:05:09Z").unwrap();
        assert_eq!("2019/10/2 7:05:09", ts.to_locale_string(UtcOffset::UTC));
    }

    #[test]
    fn locale_string_moves_to_offset() {
        let ts = Timestamp::parse("2019-12-31T20:30:00Z").unwrap();
        assert_eq!("2020/1/1 5:30:00", ts.to_locale_string(offset!(+9)));
    }

    #[test]
    fn deserialize_from_json_string() {
        let ts: Timestamp = serde_json::from_str("\"2023-05-01T12:00:00.000Z\"").unwrap();
        assert_eq!(2023, ts.0.year());
    }
}
