mod integration;
mod properties;
