use dictionary::{Dictionary, DictionaryError, PartOfSpeech, Url};
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
};

/// Answers a single request with `status` and `body`, returning the base url
/// and a handle resolving to the request line the client sent.
async fn serve_once(status: &'static str, body: &'static str) -> (Url, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let read = socket.read(&mut buf).await.unwrap();
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buf[..read]);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        let request = String::from_utf8_lossy(&request).into_owned();
        request.lines().next().unwrap_or_default().to_owned()
    });
    let base = Url::parse(&format!("http://{addr}/api/v2/entries/en")).unwrap();
    (base, handle)
}

fn local_dictionary(base: Url) -> Dictionary {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    Dictionary::with_client(client, base)
}

#[tokio::test]
async fn found_word_is_decoded() {
    let body = r#"[{"word":"keyboard","phonetic":"/ˈkiːbɔːd/","phonetics":[{"text":"/ˈkiːbɔːd/","audio":"https://api.dictionaryapi.dev/media/pronunciations/en/keyboard-us.mp3"}],"meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"(etc.) A set of keys used to operate a typewriter, computer etc.","synonyms":[],"antonyms":[]}],"synonyms":["electronic keyboard"],"antonyms":[]},{"partOfSpeech":"verb","definitions":[{"definition":"To type on a computer keyboard.","example":"Keyboarding is the part of this job I hate the most.","synonyms":[],"antonyms":[]}],"synonyms":[],"antonyms":[]}],"license":{"name":"CC BY-SA 3.0","url":"https://creativecommons.org/licenses/by-sa/3.0"},"sourceUrls":["https://en.wiktionary.org/wiki/keyboard"]}]"#;
    let (base, request) = serve_once("200 OK", body).await;
    let dict = local_dictionary(base);

    let word = dict.get_definition("keyboard").await.unwrap();
    assert_eq!(word.word, "keyboard");
    assert_eq!(word.display_phonetic(), Some("/ˈkiːbɔːd/"));
    assert!(word.audio_url().unwrap().ends_with("keyboard-us.mp3"));
    assert_eq!(word.meanings[1].part_of_speech, PartOfSpeech::Verb);
    assert_eq!(word.all_synonyms().collect::<Vec<_>>(), ["electronic keyboard"]);

    let request_line = request.await.unwrap();
    assert_eq!(request_line, "GET /api/v2/entries/en/keyboard HTTP/1.1");
}

#[tokio::test]
async fn unknown_word_is_not_found() {
    let body = r#"{"title":"No Definitions Found","message":"Sorry pal, we couldn't find definitions for the word you were looking for.","resolution":"You can try the search again at later time or head to the web instead."}"#;
    let (base, _) = serve_once("404 Not Found", body).await;
    let dict = local_dictionary(base);

    match dict.get_definition("qwertyuiop").await {
        Err(DictionaryError::NotFound(not_found)) => {
            assert_eq!(not_found.title, "No Definitions Found");
            assert!(not_found.resolution.contains("search again"));
        }
        other => panic!("expected not found, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_entry_list_is_not_found() {
    let (base, _) = serve_once("200 OK", "[]").await;
    let dict = local_dictionary(base);
    assert!(matches!(
        dict.get_definition("nothing").await,
        Err(DictionaryError::NotFound(_))
    ));
}

#[tokio::test]
async fn server_error_keeps_status() {
    let (base, _) = serve_once("503 Service Unavailable", "{}").await;
    let dict = local_dictionary(base);
    match dict.get_definition("word").await {
        Err(DictionaryError::Status(status)) => assert_eq!(status.as_u16(), 503),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn garbage_body_fails_to_decode() {
    let (base, _) = serve_once("200 OK", "<html>oops</html>").await;
    let dict = local_dictionary(base);
    assert!(matches!(
        dict.get_definition("word").await,
        Err(DictionaryError::Deserialize(_))
    ));
}

#[tokio::test]
async fn unreachable_server_fails_to_fetch() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let dict = local_dictionary(Url::parse(&format!("http://{addr}/entries")).unwrap());
    assert!(matches!(
        dict.get_definition("word").await,
        Err(DictionaryError::Fetch(_))
    ));
}
