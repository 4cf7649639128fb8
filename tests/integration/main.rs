mod charset;
mod directory;
mod remove;
mod stream;
