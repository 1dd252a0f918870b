use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TuxeyeError::InvalidMagic
            .to_string()
            .contains("invalid magic:")
    );
    assert!(
        TuxeyeError::truncated(16, 3)
            .to_string()
            .contains("truncated input: expected 16 bytes, got 3")
    );
    assert!(
        TuxeyeError::AllocationFailure { bytes: 8 }
            .to_string()
            .contains("allocation failure:")
    );
    assert!(
        TuxeyeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn io_errors_convert_with_question_mark() {
    fn fails() -> TuxeyeResult<()> {
        Err(std::io::Error::other("disk gone"))?;
        Ok(())
    }
    let err = fails().unwrap_err();
    assert!(matches!(err, TuxeyeError::Io(_)));
    assert!(err.to_string().contains("disk gone"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TuxeyeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
