mod submit_form;

// black-box tests are most robust, as they reflect exactly how clients
// interact with the API (request type, path, body); the server is spawned on
// a random port with its own data file, and the tests talk to it over HTTP
// like any other client would
