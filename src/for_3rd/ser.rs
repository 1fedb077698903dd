//! Serialization of BigDec.
//! Serialization uses the canonical decimal string form.

use crate::BigDec;
use serde::{Serialize, Serializer};

impl Serialize for BigDec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::to_string;

    use crate::BigDec;

    #[test]
    fn to_json() {
        assert_eq!(to_string(&BigDec::from(0)).unwrap(), "\"0\"");
        assert_eq!(to_string(&BigDec::from(-1337)).unwrap(), "\"-1337\"");

        let v: BigDec = "13.370000".parse().unwrap();
        assert_eq!(to_string(&v).unwrap(), "\"13.37\"");
    }
}
