mod pages;
mod templates;
