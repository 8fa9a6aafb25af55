mod observability;
mod staging;
