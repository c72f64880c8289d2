pub(crate) mod over;
