mod cipher;
mod construction;
mod sampling;
