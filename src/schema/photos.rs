use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_PHOTOS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhotoError {
    #[error("Máximo de 4 fotos por abastecimento")]
    LimitReached,
    #[error("Referência de foto inválida")]
    EmptyReference,
}

/// Lista ordenada de referencias de fotos (URL o id de contenido), máximo 4.
///
/// El contenido de la imagen no se valida, solo cantidad y orden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoList(Vec<String>);

impl PhotoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_from_vec(photos: Vec<String>) -> Result<Self, PhotoError> {
        let mut list = Self::new();
        for photo in photos {
            list.push(photo)?;
        }
        Ok(list)
    }

    /// Rechaza la quinta referencia; la lista queda intacta
    pub fn push(&mut self, reference: impl Into<String>) -> Result<(), PhotoError> {
        let reference = reference.into();
        if reference.trim().is_empty() {
            return Err(PhotoError::EmptyReference);
        }
        if self.0.len() >= MAX_PHOTOS {
            return Err(PhotoError::LimitReached);
        }
        self.0.push(reference);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn remaining(&self) -> usize {
        MAX_PHOTOS - self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifth_photo_rejected() {
        let mut photos = PhotoList::new();
        for i in 0..4 {
            photos.push(format!("photos/{i}.jpg")).unwrap();
        }
        assert_eq!(photos.push("photos/4.jpg"), Err(PhotoError::LimitReached));
        assert_eq!(photos.len(), 4);
        assert_eq!(photos.remaining(), 0);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut photos =
            PhotoList::try_from_vec(vec!["a".into(), "b".into(), "c".into()]).unwrap();
        assert_eq!(photos.remove(1), Some("b".to_string()));
        assert_eq!(photos.as_slice(), &["a".to_string(), "c".to_string()]);
        assert_eq!(photos.remove(5), None);
    }

    #[test]
    fn test_try_from_vec_over_limit() {
        let refs = (0..5).map(|i| i.to_string()).collect();
        assert_eq!(PhotoList::try_from_vec(refs), Err(PhotoError::LimitReached));
    }
}
