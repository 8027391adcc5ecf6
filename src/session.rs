//! Session state and the generation pipeline.
//!
//! A [`Session`] owns the configuration, the most recent password and the
//! history buffer for one logical caller - explicit state instead of
//! module-level globals. Each generation request runs to completion on the
//! caller's thread; concurrent callers each get their own session and random
//! source.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::builder::build_password;
use crate::config::GenerationConfig;
use crate::error::GenerateError;
use crate::history::HistoryBuffer;
use crate::pool::CharacterPool;
use crate::random::RandomSource;
use crate::store::{SettingsStore, StoreError};
use crate::strength::{StrengthTier, classify};

/// A generated password together with its strength classification.
///
/// Immutable after creation; the entropy figure is for display only.
pub struct GeneratedPassword {
    password: SecretString,
    entropy_bits: f64,
    tier: StrengthTier,
}

impl GeneratedPassword {
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub fn entropy_bits(&self) -> f64 {
        self.entropy_bits
    }

    pub fn tier(&self) -> StrengthTier {
        self.tier
    }
}

/// Runs the full pipeline: pool assembly, password build, classification.
///
/// # Arguments
/// * `config` - The generation constraints; validated here, not upstream
/// * `rng` - Secure index source
/// * `token` - Optional cancellation token (async feature only)
///
/// # Errors
/// Any [`GenerateError`]; on error no password exists and no state changed.
pub fn generate_password(
    config: &GenerationConfig,
    rng: &mut dyn RandomSource,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Result<GeneratedPassword, GenerateError> {
    let pool = CharacterPool::build(config, rng)?;

    #[cfg(feature = "async")]
    let password = build_password(&pool, config.length, config.exclude_duplicates, rng, token)?;

    #[cfg(not(feature = "async"))]
    let password = build_password(&pool, config.length, config.exclude_duplicates, rng)?;

    let report = classify(pool.len(), config.length);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        length = config.length,
        pool_size = pool.len(),
        bits = report.bits,
        tier = %report.tier,
        "password generated"
    );

    Ok(GeneratedPassword {
        password: SecretString::new(password.into()),
        entropy_bits: report.bits,
        tier: report.tier,
    })
}

/// Per-caller state: configuration, current password and history.
#[derive(Default)]
pub struct Session {
    config: GenerationConfig,
    current: Option<GeneratedPassword>,
    history: HistoryBuffer,
}

impl Session {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            current: None,
            history: HistoryBuffer::new(),
        }
    }

    /// Builds a session from persisted settings.
    ///
    /// Absent or broken settings are non-fatal: the session starts from
    /// [`GenerationConfig::default`].
    pub fn restore(store: &dyn SettingsStore) -> Self {
        let config = match store.load() {
            Ok(Some(config)) => config,
            Ok(None) => GenerationConfig::default(),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("failed to load settings, using defaults: {}", _e);
                GenerationConfig::default()
            }
        };
        Self::new(config)
    }

    /// Persists the current configuration.
    pub fn persist(&self, store: &dyn SettingsStore) -> Result<(), StoreError> {
        store.save(&self.config)
    }

    /// Generates a password under the session configuration.
    ///
    /// On success the result becomes the session's current password and, when
    /// `record_history` is set, is appended to the history (length-slider
    /// style regeneration passes `false`). On error the current password and
    /// the history are left untouched.
    pub fn generate(
        &mut self,
        rng: &mut dyn RandomSource,
        record_history: bool,
        #[cfg(feature = "async")] token: Option<CancellationToken>,
    ) -> Result<&GeneratedPassword, GenerateError> {
        #[cfg(feature = "async")]
        let generated = generate_password(&self.config, rng, token)?;

        #[cfg(not(feature = "async"))]
        let generated = generate_password(&self.config, rng)?;

        if record_history {
            self.history.append(SecretString::new(
                generated.password.expose_secret().to_owned().into(),
            ));
        }
        Ok(&*self.current.insert(generated))
    }

    pub fn current(&self) -> Option<&GeneratedPassword> {
        self.current.as_ref()
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut GenerationConfig {
        &mut self.config
    }

    /// Ordered history view, oldest first.
    pub fn history(&self) -> Vec<&SecretString> {
        self.history.snapshot()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

/// Async wrapper that generates under a cancellation token and delivers the
/// outcome over a channel.
#[cfg(feature = "async")]
pub async fn generate_password_tx(
    config: &GenerationConfig,
    rng: &mut dyn RandomSource,
    token: CancellationToken,
    tx: mpsc::Sender<Result<GeneratedPassword, GenerateError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("generation is about to start...");

    let result = generate_password(config, rng, Some(token));

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send generation result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;
    use crate::random::OsRandom;

    #[tokio::test]
    async fn test_cancelled_token_yields_no_password() {
        let token = CancellationToken::new();
        token.cancel();

        let mut session = Session::new(GenerationConfig::default());
        let mut rng = OsRandom;
        let result = session.generate(&mut rng, true, Some(token));

        assert!(matches!(result, Err(GenerateError::Cancelled)));
        assert!(session.current().is_none());
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_live_token_generates_normally() {
        let token = CancellationToken::new();
        let mut session = Session::new(GenerationConfig::default());
        let mut rng = OsRandom;

        let generated = session.generate(&mut rng, true, Some(token)).unwrap();
        assert_eq!(generated.password().expose_secret().chars().count(), 16);
    }

    #[tokio::test]
    async fn test_generate_password_tx_delivers_over_channel() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let config = GenerationConfig::default();
        let mut rng = OsRandom;

        generate_password_tx(&config, &mut rng, token, tx).await;

        let result = rx.recv().await.expect("Should receive generation result");
        let generated = result.expect("generation succeeds");
        assert_eq!(generated.password().expose_secret().chars().count(), 16);
    }
}
