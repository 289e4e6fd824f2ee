pub mod gaussian_blurrer;
