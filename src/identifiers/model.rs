/*! FastText language identification model.
* !*/
use std::path::Path;

use fasttext::FastText as FastTextLib;
use log::error;

use crate::error::Error;

use super::identification::Identification;

/// Prediction trait.
///
/// Anything able to guess the language of a line can be used to filter records.
/// `Sync` is required since identification is done on several threads.
pub trait Predict: Sync {
    /// returns the top-1 identification, or `None` if nothing is above the confidence threshold.
    fn predict_one(&self, line: &str) -> Result<Option<Identification>, Error>;
}

/// FastText model.
pub struct FastText {
    inner: FastTextLib,
    pub threshold: f32,
}

impl Predict for FastText {
    fn predict_one(&self, line: &str) -> Result<Option<Identification>, Error> {
        let pred = self.inner.predict(line, 1, self.threshold)?;

        // move out of pred, since we won't need it afterwards.
        match pred.into_iter().next() {
            None => Ok(None),
            Some(pred) => match Identification::try_from(pred) {
                Ok(id) => Ok(Some(id)),
                Err(e) => {
                    error!("Couldn't find a proper label: {e:?}");
                    Err(e.into())
                }
            },
        }
    }
}

/// Fasttext builder.
pub struct FastTextBuilder<'a> {
    path: Option<&'a Path>,
    threshold: Option<f32>,
}

impl<'a> FastTextBuilder<'a> {
    fn init_fasttextlib(path: &Path) -> Result<FastTextLib, Error> {
        if !path.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no language identification model at {path:?}"),
            )
            .into());
        }
        let path = path
            .to_str()
            .ok_or_else(|| Error::Custom(format!("Could not parse path {path:?}")))?;
        let mut ft = FastTextLib::new();
        ft.load_model(path)?;
        Ok(ft)
    }

    /// attempt to build, resort to the following defaults if not set:
    /// - path: "lid.176.bin"
    /// - threshold: 0.0
    pub fn build_or_default(&self) -> Result<FastText, Error> {
        let inner = Self::init_fasttextlib(self.path.unwrap_or(Path::new("lid.176.bin")))?;
        let threshold = self.threshold.unwrap_or(0.0);

        Ok(FastText { inner, threshold })
    }

    pub fn build(&self) -> Result<FastText, Error> {
        let (path, threshold) = match (self.path, self.threshold) {
            (Some(path), Some(threshold)) => (path, threshold),
            (None, _) => return Err(Error::Custom("No path provided".to_string())),
            (_, None) => return Err(Error::Custom("No threshold provided".to_string())),
        };

        Ok(FastText {
            inner: Self::init_fasttextlib(path)?,
            threshold,
        })
    }

    pub fn path<'b>(&'b mut self, path: &'a Path) -> &'b mut FastTextBuilder<'a> {
        self.path = Some(path);
        self
    }

    pub fn threshold<'b>(&'b mut self, threshold: f32) -> &'b mut FastTextBuilder<'a> {
        self.threshold = Some(threshold);
        self
    }
}

impl<'a> Default for FastTextBuilder<'a> {
    fn default() -> Self {
        Self {
            path: Some(Path::new("lid.176.bin")),
            threshold: Some(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::FastTextBuilder;

    #[test]
    fn missing_model_is_an_error() {
        let model = FastTextBuilder::default()
            .path(Path::new("this/model/does/not/exist.bin"))
            .build();
        assert!(model.is_err());
    }
}
