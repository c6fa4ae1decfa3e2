use rand::Rng;
use serde::Serialize;

// Default shape of a generated record
pub const DEFAULT_COLUMNS: usize = 475;
pub const DEFAULT_ROWS: usize = 3000;

/// Name of the single annotation attached to every generated record
pub const META_NAME: &str = "example_metadata";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NamedValue {
    pub name: String,
    pub value: String,
}

/// A data point submitted for storage. The service assigns its identity.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Record {
    /// Fixed-length numeric payload
    pub data: Vec<f32>,

    /// Free-form annotations
    pub meta: Vec<NamedValue>,
}

impl Record {
    pub fn new(data: Vec<f32>, meta: Vec<NamedValue>) -> Self {
        Self { data, meta }
    }

    /// Builds a record of `columns` values drawn uniformly from [0, 100),
    /// annotated with one random number in [0, 1).
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, columns: usize) -> Self {
        let data = (0..columns).map(|_| rng.gen_range(0.0..100.0)).collect();
        let noise: f64 = rng.gen();

        Self {
            data,
            meta: vec![NamedValue {
                name: META_NAME.to_string(),
                value: format!("Random number is {:.6}", noise),
            }],
        }
    }
}

/// An oracle as returned by a name lookup.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OracleRef {
    pub id: String,
    pub name: String,
}

/// Invocation of an oracle against an ordered list of string arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub oracle_id: String,
    pub args: Vec<String>,
}

impl Call {
    /// The benchmark's call shape: the quoted record identifier followed by a
    /// fixed literal.
    pub fn for_record(oracle_id: &str, record_id: &str, literal: &str) -> Self {
        Self {
            oracle_id: oracle_id.to_string(),
            args: vec![format!("\"{}\"", record_id), literal.to_string()],
        }
    }
}

/// Opaque result of a `Run`. Never decoded by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOutput {
    pub msg: String,
    pub compressed: bool,
    pub payload: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_record_has_requested_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let record = Record::generate(&mut rng, 475);

        assert_eq!(record.data.len(), 475);
        assert!(record.data.iter().all(|v| (0.0..100.0).contains(v)));
        assert_eq!(record.meta.len(), 1);
        assert_eq!(record.meta[0].name, META_NAME);
    }

    #[test]
    fn meta_value_carries_six_decimals() {
        let mut rng = StdRng::seed_from_u64(42);
        let record = Record::generate(&mut rng, 0);

        let value = &record.meta[0].value;
        let number = value.strip_prefix("Random number is ").unwrap();
        let (_, frac_part) = number.split_once('.').unwrap();
        assert_eq!(frac_part.len(), 6);
        let parsed: f64 = number.parse().unwrap();
        assert!((0.0..=1.0).contains(&parsed));
        assert!(record.data.is_empty());
    }

    #[test]
    fn call_quotes_record_id() {
        let call = Call::for_record("9", "abc", "0.1");
        assert_eq!(call.oracle_id, "9");
        assert_eq!(call.args, vec!["\"abc\"".to_string(), "0.1".to_string()]);
    }
}
