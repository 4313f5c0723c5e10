//! Partition-based clustering.
//!
//! `cluster` runs Lloyd's algorithm with an injected random source; `KMeans`
//! is a small builder around it that owns a seed.
//!
//! # Examples
//!
//! ```rust
//! use kselect::{KMeans, Point};
//! use ndarray::array;
//!
//! let x = array![
//!     [0.0, 0.0],
//!     [0.0, 1.0],
//!     [10.0, 10.0],
//!     [10.0, 11.0]
//! ];
//!
//! let result = KMeans::new(2)
//!     .max_iter(100)
//!     .random_state(42)
//!     .fit(&Point::from_rows(&x))
//!     .unwrap();
//!
//! assert_eq!(result.centroids().len(), 2);
//! println!("Inertia: {:.4}", result.inertia());
//! ```

mod kmeans;

pub use kmeans::{cluster, ClusterResult, KMeans};
