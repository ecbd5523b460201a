pub(crate) mod extent;

/// Areas are published rounded to a tenth of a square kilometer.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod test {

    use super::round_to_tenth;

    #[test]
    fn test_round_to_tenth() {

        assert_eq!(round_to_tenth(999.9499),999.9);
        assert_eq!(round_to_tenth(999.95),1000.0);
        assert_eq!(round_to_tenth(0.04),0.0);

    }

}
