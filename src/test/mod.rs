mod dates;
#[cfg(test)]
mod mock_server;
