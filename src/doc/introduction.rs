/*!
# Introductory Tutorial for Vault Runner

A Vault Runner program drives a robot through a grid until it escapes.
Put a program in a file, one instruction per line:

```text
# walk the corridor
WHILE FRONT
  MOVE
END
```

Then point the `vault` executable at it. Without a map it uses the
built-in corridor.

<pre><code>&nbsp;$ vault corridor.vr
&nbsp;  COMPLETED AFTER 15 STEPS
&nbsp;  ROBOT AT (5, 0) FACING EAST
</code></pre>

The robot walked until the wall stopped it, which left it standing on the
key at the corner. Pick it up and head north through the door:

```text
WHILE FRONT
  MOVE
END
PICK
LEFT
WHILE FRONT
  MOVE
  IF DOOR
    OPEN
  END
END
```

<pre><code>&nbsp;$ vault corridor.vr
&nbsp;  ESCAPED THROUGH EXIT AFTER 33 STEPS
</code></pre>

Other worlds are chosen with `--world room`, `--world multi-key` or a text
map file, see [`Map`](crate::world::Map). `--history 20` prints the last twenty steps, and
`RUST_LOG=vault=debug` shows what the robot did at each one.

Programs are limited to twenty distinct keywords. With `--extended` the
larger keyword set described in [Chapter 2](crate::__Chapter_2) is
available, which makes that limit easy to hit.

*/
