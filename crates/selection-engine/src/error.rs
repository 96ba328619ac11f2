use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown dataset: {0}")]
    UnknownDataset(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_unknown_dataset() {
        let err = SelectionError::UnknownDataset("resources".into());
        assert_eq!(err.to_string(), "unknown dataset: resources");
    }
}
