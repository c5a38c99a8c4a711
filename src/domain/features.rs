//! Acoustic feature-name mapping
//!
//! The functionals extractor emits a wide vocabulary of eGeMAPS-style
//! column names. Only a curated subset is useful to the analysis model;
//! this table projects those columns onto compact semantic names.
//!
//! The table is versioned data, not logic: the projection algorithm in
//! `pipeline::summarizer` never branches on individual names, so the
//! vocabulary can evolve without touching it.

/// Ordered (source name, semantic name) pairs.
pub type FeatureMap = &'static [(&'static str, &'static str)];

/// Version 1 of the mapping, matching the eGeMAPSv02 functionals set.
pub static FEATURE_MAP_V1: FeatureMap = &[
    // Pitch
    ("F0semitoneFrom27.5Hz_sma3nz_amean", "mean_pitch_semitone"),
    ("F0semitoneFrom27.5Hz_sma3nz_stddev", "pitch_stddev"),
    // Speaking rate proxy
    ("voicedSegmentsPerSec_sma3nz_amean", "voiced_segments_per_sec"),
    // Loudness
    ("loudness_sma3nz_amean", "mean_loudness"),
    ("loudness_sma3nz_stddev", "loudness_stddev"),
    ("loudness_sma3nz_min", "loudness_min"),
    ("loudness_sma3nz_max", "loudness_max"),
    // Voice quality / noise
    ("HNRdBACF_sma3nz_amean", "mean_hnr"),
    // Silence / pauses
    ("silenceRate_sma3nz_amean", "silence_rate"),
    // Jitter and shimmer (roughness)
    ("jitterLocal_sma3nz_amean", "jitter_local"),
    ("shimmerLocal_sma3nz_amean", "shimmer_local"),
    // Spectral / timbre
    ("spectralFlux_sma3nz_amean", "spectral_flux"),
    ("spectralCentroid_sma3nz_amean", "spectral_centroid"),
    ("mfcc1_sma3nz_amean", "mfcc1_mean"),
];
